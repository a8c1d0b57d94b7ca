use component_macros::discoverable;

pub trait Repo<T> {}

pub struct User;

#[discoverable(implements(Repo<User>))]
pub struct SqlRepo;

impl Repo<User> for SqlRepo {}

#[discoverable(implements(Repo<User>), abstract)]
pub struct BaseRepo;

impl Repo<User> for BaseRepo {}

#[discoverable]
pub trait Marker {}

fn main() {
    let descriptors = infrastructure_common::registered_type_descriptors();
    assert_eq!(descriptors.len(), 3);
}
