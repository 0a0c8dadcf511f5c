// Domain layer: the store entity and its serializable form.

pub mod model;
pub mod store;
