// Domain layer: cart models. No logging or I/O here.

pub mod model;
