//! 泛型实现发现引擎
//!
//! 给定一个开放泛型接口，从类型宇宙中找出所有实现了该接口封闭实例的具体类型，
//! 并把每个 (接口, 实现) 对写入服务注册表。
//!
//! 扫描顺序：结构过滤 -> 排除谓词 -> 精确匹配 -> 注册。
//! 没有匹配不算错误，只会产生零条注册；唯一会返回的错误来自注册表本身。

use di_abstractions::{
    filters, RegistrationOptions, SearchScope, ServiceDescriptor, ServiceRegistry, TypeUniverse,
};
use infrastructure_common::{
    DependencyResult, GenericDefinition, ModuleDescriptor, ModuleName, TypeDescriptor, TypeRef,
};
use tracing::{debug, info};

/// 注册 `target` 的所有实现
///
/// `calling_module` 必须是调用公开注册入口的模块，
/// 仅在 [`SearchScope::CallingModuleOnly`] 下使用。
/// `target` 为 `None`、普通类型或封闭泛型实例时直接返回，不做任何注册。
pub fn register_generic_implementations<R, U>(
    registry: &mut R,
    universe: &U,
    calling_module: &ModuleName,
    target: Option<&TypeRef>,
    options: &RegistrationOptions,
) -> DependencyResult<()>
where
    R: ServiceRegistry + ?Sized,
    U: TypeUniverse + ?Sized,
{
    let Some(definition) = target.and_then(open_definition) else {
        debug!(
            "目标类型不是泛型定义, 跳过扫描: {}",
            target.map_or_else(|| "<none>".to_string(), ToString::to_string)
        );
        return Ok(());
    };

    let mut candidates = 0usize;
    let mut registrations = 0usize;

    for module in candidate_modules(universe, calling_module, options) {
        for descriptor in module
            .types
            .iter()
            .filter(|descriptor| filters::is_candidate_implementation(descriptor))
        {
            if options.is_type_excluded(descriptor) {
                debug!("排除类型: {}", descriptor.info.name);
                continue;
            }
            candidates += 1;

            for service_type in matching_interfaces(descriptor, definition) {
                registry.insert(ServiceDescriptor::new(
                    *service_type,
                    descriptor.info,
                    options.lifetime(),
                ))?;
                registrations += 1;
            }
        }
    }

    info!(
        "泛型实现注册完成: {} (范围: {}, 候选类型: {}, 注册数: {}, 生命周期: {})",
        definition,
        options.scope(),
        candidates,
        registrations,
        options.lifetime()
    );

    Ok(())
}

/// 只有未绑定的泛型定义才会触发扫描
const fn open_definition(target: &TypeRef) -> Option<GenericDefinition> {
    match target {
        TypeRef::GenericDefinition(definition) => Some(*definition),
        TypeRef::Plain(_) | TypeRef::Closed { .. } => None,
    }
}

fn candidate_modules<'u, U>(
    universe: &'u U,
    calling_module: &ModuleName,
    options: &RegistrationOptions,
) -> Vec<&'u ModuleDescriptor>
where
    U: TypeUniverse + ?Sized,
{
    match options.scope() {
        SearchScope::AllLoadedModules => universe
            .modules()
            .iter()
            .filter(|module| {
                let excluded = options.is_module_excluded(module);
                if excluded {
                    debug!("排除模块: {}", module.name);
                }
                !excluded
            })
            .collect(),
        SearchScope::CallingModuleOnly => {
            let module = universe.module(calling_module);
            if module.is_none() {
                debug!("调用模块未出现在类型宇宙中: {}", calling_module);
            }
            module.into_iter().collect()
        }
    }
}

fn matching_interfaces(
    descriptor: &TypeDescriptor,
    definition: GenericDefinition,
) -> impl Iterator<Item = &TypeRef> {
    descriptor
        .interfaces
        .iter()
        .filter(move |interface| interface.generic_type_definition() == Some(definition))
}
