// Domain layer: configuration roots and the cppcheck command line.

pub mod invocation;
pub mod roots;
