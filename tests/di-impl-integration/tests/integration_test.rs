//! 泛型实现注册与服务注册表、设置的集成测试

use di_abstractions::{ServiceDescriptor, ServiceRegistry};
use di_impl::{GenericRegistration, RegistrationSettings, ServiceCollection, TypeCatalog};
use infrastructure_common::{
    DependencyError, DependencyResult, Lifetime, ModuleDescriptor, ModuleName, TypeDescriptor,
    TypeRef,
};
use std::io::Write;

trait Repo<T> {}
trait Handler<T> {}

struct User;
struct Order;

struct SqlRepo;
struct LegacyRepo;
struct InternalRepo;
struct OrderHandler;

fn catalog() -> TypeCatalog {
    TypeCatalog::new()
        .with_module(
            ModuleDescriptor::new("app")
                .with_type(
                    TypeDescriptor::of::<SqlRepo>("app::repos")
                        .implementing(TypeRef::of::<dyn Repo<User>>())
                        .implementing(TypeRef::of::<dyn Repo<Order>>()),
                )
                .with_type(
                    TypeDescriptor::of::<InternalRepo>("app::repos")
                        .with_visibility(false)
                        .implementing(TypeRef::of::<dyn Repo<Order>>()),
                )
                .with_type(
                    TypeDescriptor::of::<OrderHandler>("app::handlers")
                        .implementing(TypeRef::of::<dyn Handler<Order>>()),
                ),
        )
        .with_module(
            ModuleDescriptor::new("legacy").with_type(
                TypeDescriptor::of::<LegacyRepo>("legacy")
                    .implementing(TypeRef::of::<dyn Repo<User>>()),
            ),
        )
}

fn repo() -> TypeRef {
    TypeRef::open::<dyn Repo<()>>()
}

/// 第 N 次插入失败的注册表
struct FailingRegistry {
    accepted: Vec<ServiceDescriptor>,
    fail_at: usize,
}

impl ServiceRegistry for FailingRegistry {
    fn insert(&mut self, descriptor: ServiceDescriptor) -> DependencyResult<()> {
        if self.accepted.len() == self.fail_at {
            return Err(DependencyError::registration(
                descriptor.implementation_type.name,
                "注册表已满",
            ));
        }
        self.accepted.push(descriptor);
        Ok(())
    }
}

#[test]
fn test_registry_error_stops_registration() {
    let registration = GenericRegistration::new(catalog(), ModuleName::new("app"));
    let mut registry = FailingRegistry {
        accepted: Vec::new(),
        fail_at: 1,
    };

    let err = registration
        .add_generic_implementations(&mut registry, Some(&repo()), Lifetime::Scoped)
        .unwrap_err();

    assert!(matches!(err, DependencyError::RegistrationError { .. }));
    // 失败前写入的条目保留
    assert_eq!(registry.accepted.len(), 1);
}

#[test]
fn test_read_only_collection_rejects_registration() {
    let registration = GenericRegistration::new(catalog(), ModuleName::new("app"));
    let mut services = ServiceCollection::new();
    services.make_read_only();

    let err = registration
        .add_transient_generic_implementations(&mut services, Some(&repo()))
        .unwrap_err();

    assert!(matches!(err, DependencyError::RegistryReadOnly { .. }));
    assert!(services.is_empty());
}

#[test]
fn test_read_only_collection_accepts_empty_scan() {
    // 没有匹配时不会触碰注册表
    let registration = GenericRegistration::new(catalog(), ModuleName::new("app"));
    let mut services = ServiceCollection::new();
    services.make_read_only();

    registration
        .add_transient_generic_implementations(&mut services, Some(&TypeRef::of::<dyn Repo<User>>()))
        .unwrap();
    registration
        .add_transient_generic_implementations(&mut services, None)
        .unwrap();
}

#[test]
fn test_boxed_and_borrowed_registries() {
    let registration = GenericRegistration::new(catalog(), ModuleName::new("app"));

    let mut boxed: Box<Vec<ServiceDescriptor>> = Box::default();
    registration
        .add_singleton_generic_implementations(&mut boxed, Some(&repo()))
        .unwrap();
    assert_eq!(boxed.len(), 4);

    let mut plain = Vec::new();
    let mut borrowed = &mut plain;
    registration
        .add_singleton_generic_implementations(&mut borrowed, Some(&repo()))
        .unwrap();
    assert_eq!(plain, *boxed);
}

#[test]
fn test_settings_file_drives_registration() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "lifetime = \"scoped\"")?;
    writeln!(file, "public_only = true")?;
    writeln!(file, "exclude_modules = [\"legacy\"]")?;

    let settings = RegistrationSettings::load(Some(file.path()))?;
    let registration = GenericRegistration::new(catalog(), ModuleName::new("app"));
    let mut services = ServiceCollection::new();

    registration.add_generic_implementations_with(&mut services, Some(&repo()), |options| {
        settings.apply(options);
    })?;

    assert_eq!(
        services.iter().copied().collect::<Vec<_>>(),
        vec![
            ServiceDescriptor::of::<dyn Repo<User>, SqlRepo>(Lifetime::Scoped),
            ServiceDescriptor::of::<dyn Repo<Order>, SqlRepo>(Lifetime::Scoped),
        ]
    );
    Ok(())
}

#[test]
fn test_type_prefix_exclusion_from_settings() -> anyhow::Result<()> {
    let settings = RegistrationSettings::from_toml_str(&format!(
        "exclude_type_prefixes = [\"{}\"]",
        std::any::type_name::<SqlRepo>()
    ))?;
    let registration = GenericRegistration::new(catalog(), ModuleName::new("app"));
    let mut services = ServiceCollection::new();

    registration.add_generic_implementations_with(&mut services, Some(&repo()), |options| {
        settings.apply(options);
    })?;

    assert_eq!(
        services.implementations_of(&TypeRef::of::<dyn Repo<User>>()),
        vec![infrastructure_common::TypeInfo::of::<LegacyRepo>()]
    );
    assert_eq!(services.len(), 2);
    Ok(())
}

#[test]
fn test_multiple_targets_share_one_collection() {
    let registration = GenericRegistration::new(catalog(), ModuleName::new("app"));
    let mut services = ServiceCollection::new();

    registration
        .add_scoped_generic_implementations(&mut services, Some(&repo()))
        .unwrap();
    registration
        .add_singleton_generic_implementations(
            &mut services,
            Some(&TypeRef::open::<dyn Handler<()>>()),
        )
        .unwrap();

    assert_eq!(services.len(), 5);
    assert!(services.contains(&ServiceDescriptor::of::<dyn Handler<Order>, OrderHandler>(
        Lifetime::Singleton
    )));
}
