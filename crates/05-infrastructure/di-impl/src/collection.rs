//! 内存服务集合

use di_abstractions::{ServiceDescriptor, ServiceRegistry};
use infrastructure_common::{DependencyError, DependencyResult, TypeInfo, TypeRef};
use tracing::debug;

/// 服务集合
///
/// 按插入顺序保存服务描述符，不做去重。
#[derive(Debug, Clone, Default)]
pub struct ServiceCollection {
    descriptors: Vec<ServiceDescriptor>,
    read_only: bool,
}

impl ServiceCollection {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 描述符数量
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// 遍历描述符
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceDescriptor> {
        self.descriptors.iter()
    }

    /// 是否包含指定描述符
    pub fn contains(&self, descriptor: &ServiceDescriptor) -> bool {
        self.descriptors.contains(descriptor)
    }

    /// 指定描述符出现的次数
    pub fn count(&self, descriptor: &ServiceDescriptor) -> usize {
        self.descriptors.iter().filter(|d| *d == descriptor).count()
    }

    /// 指定服务类型的全部描述符
    pub fn descriptors_for<'a>(
        &'a self,
        service_type: &'a TypeRef,
    ) -> impl Iterator<Item = &'a ServiceDescriptor> + 'a {
        self.descriptors
            .iter()
            .filter(move |d| &d.service_type == service_type)
    }

    /// 指定服务类型的全部实现类型
    pub fn implementations_of(&self, service_type: &TypeRef) -> Vec<TypeInfo> {
        self.descriptors_for(service_type)
            .map(|d| d.implementation_type)
            .collect()
    }

    /// 将集合设为只读，之后的插入都会失败
    pub fn make_read_only(&mut self) {
        self.read_only = true;
    }

    /// 是否只读
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl ServiceRegistry for ServiceCollection {
    fn insert(&mut self, descriptor: ServiceDescriptor) -> DependencyResult<()> {
        if self.read_only {
            return Err(DependencyError::RegistryReadOnly {
                service_type: descriptor.service_type.to_string(),
            });
        }

        debug!("注册服务: {}", descriptor);
        self.descriptors.push(descriptor);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ServiceCollection {
    type Item = &'a ServiceDescriptor;
    type IntoIter = std::slice::Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
