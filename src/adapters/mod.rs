// Adapters layer: concrete bindings of the directory to the outside world.

pub mod http;
