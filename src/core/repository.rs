use std::collections::HashMap;
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

pub trait Repository<Entity: Identifiable> {
    // create an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity, the entity version must match the stored one
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity, returning what was removed
    fn delete(&mut self, id: &str) -> LibraryResult<Entity>;

    // find by predicate, an empty predicate matches everything
    fn query(&self, predicate: &HashMap::<String, String>) -> LibraryResult<Vec<Entity>>;
}
