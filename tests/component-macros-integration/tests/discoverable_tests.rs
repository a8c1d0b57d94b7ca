//! #[discoverable] 与全局类型目录的集成测试

use component_macros::discoverable;
use di_abstractions::{filters, SearchScope, ServiceDescriptor, TypeUniverse};
use di_impl::{add_generic_implementations, calling_module, ServiceCollection, TypeCatalog};
use infrastructure_common::{registered_type_descriptors, Lifetime, TypeInfo, TypeRef};

pub trait Repo<T> {}

pub trait Handler<T> {}

pub struct User;

pub struct Order;

#[discoverable(implements(Repo<User>, Repo<Order>))]
pub struct SqlRepo;

impl Repo<User> for SqlRepo {}
impl Repo<Order> for SqlRepo {}

#[discoverable(implements(Repo<User>), abstract)]
pub struct BaseRepo;

impl Repo<User> for BaseRepo {}

#[discoverable(implements(Repo<User>))]
pub trait UserRepo: Repo<User> {}

#[discoverable(implements(Repo<Order>))]
pub(crate) struct CachedOrderRepo;

impl Repo<Order> for CachedOrderRepo {}

#[discoverable(implements(Handler<User>))]
pub enum UserHandler {
    Create,
    Delete,
}

impl Handler<User> for UserHandler {}

fn repo() -> TypeRef {
    TypeRef::open::<dyn Repo<()>>()
}

fn implementations(services: &ServiceCollection) -> Vec<TypeInfo> {
    services.iter().map(|d| d.implementation_type).collect()
}

#[test]
fn test_descriptors_are_submitted_at_startup() {
    let descriptors = registered_type_descriptors();
    let module = calling_module!();

    for name in ["SqlRepo", "BaseRepo", "UserRepo", "CachedOrderRepo", "UserHandler"] {
        let descriptor = descriptors
            .iter()
            .find(|d| d.short_name() == name)
            .unwrap_or_else(|| panic!("缺少类型描述符: {name}"));
        assert_eq!(descriptor.module, module);
    }

    let user_repo = descriptors.iter().find(|d| d.short_name() == "UserRepo").unwrap();
    assert!(user_repo.is_interface);

    let base = descriptors.iter().find(|d| d.short_name() == "BaseRepo").unwrap();
    assert!(base.is_abstract);

    let cached = descriptors
        .iter()
        .find(|d| d.short_name() == "CachedOrderRepo")
        .unwrap();
    assert!(!cached.is_public);
}

#[test]
fn test_registers_concrete_implementations() {
    let mut services = ServiceCollection::new();
    add_generic_implementations!(&mut services, Some(&repo())).unwrap();

    assert_eq!(services.len(), 3);
    assert!(services.contains(&ServiceDescriptor::of::<dyn Repo<User>, SqlRepo>(
        Lifetime::Transient
    )));
    assert!(services.contains(&ServiceDescriptor::of::<dyn Repo<Order>, SqlRepo>(
        Lifetime::Transient
    )));
    assert!(services.contains(&ServiceDescriptor::of::<dyn Repo<Order>, CachedOrderRepo>(
        Lifetime::Transient
    )));

    let registered = implementations(&services);
    assert!(!registered.contains(&TypeInfo::of::<BaseRepo>()));
    assert!(!registered.contains(&TypeInfo::of::<dyn UserRepo>()));
}

#[test]
fn test_lifetime_argument() {
    let mut services = ServiceCollection::new();
    add_generic_implementations!(&mut services, Some(&repo()), lifetime = Lifetime::Singleton)
        .unwrap();

    assert_eq!(services.len(), 3);
    assert!(services.iter().all(|d| d.lifetime == Lifetime::Singleton));
}

#[test]
fn test_configure_argument() {
    let mut services = ServiceCollection::new();
    add_generic_implementations!(
        &mut services,
        Some(&repo()),
        configure = |options: &mut di_abstractions::RegistrationOptions| {
            options
                .set_scope(SearchScope::CallingModuleOnly)
                .exclude_types(filters::non_public);
        }
    )
    .unwrap();

    assert_eq!(
        implementations(&services),
        vec![TypeInfo::of::<SqlRepo>(), TypeInfo::of::<SqlRepo>()]
    );
}

#[test]
fn test_enum_implementations() {
    let mut services = ServiceCollection::new();
    let handler = TypeRef::open::<dyn Handler<()>>();
    add_generic_implementations!(&mut services, Some(&handler), lifetime = Lifetime::Scoped)
        .unwrap();

    assert_eq!(
        services.iter().copied().collect::<Vec<_>>(),
        vec![ServiceDescriptor::of::<dyn Handler<User>, UserHandler>(Lifetime::Scoped)]
    );
}

#[test]
fn test_global_catalog_groups_by_crate() {
    let catalog = TypeCatalog::global();
    let module = catalog.module(&calling_module!()).unwrap();

    assert!(module.types.len() >= 5);
}
