// Domain layer: core models and their JSON rendering.

pub mod model;
