pub mod events;
pub mod logs;
pub mod factory;
#[cfg(test)]
pub(crate) mod memory;
