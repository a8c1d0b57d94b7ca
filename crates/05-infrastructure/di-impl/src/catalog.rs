//! 类型目录
//!
//! [`TypeUniverse`] 的内存实现，按模块分组保存类型描述符。

use di_abstractions::TypeUniverse;
use infrastructure_common::{registered_type_descriptors, ModuleDescriptor, TypeDescriptor};

/// 类型目录
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCatalog {
    modules: Vec<ModuleDescriptor>,
}

impl TypeCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 全局目录快照，包含所有通过 `#[discoverable]` 注册的类型
    pub fn global() -> Self {
        Self::from_descriptors(registered_type_descriptors())
    }

    /// 从描述符列表构建目录，模块按首次出现的顺序排列
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        let mut catalog = Self::new();
        for descriptor in descriptors {
            catalog.add_type(descriptor);
        }
        catalog
    }

    /// 添加类型，自动归入其所属模块
    pub fn add_type(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        match self
            .modules
            .iter_mut()
            .find(|module| module.name == descriptor.module)
        {
            Some(module) => module.types.push(descriptor),
            None => {
                let module = ModuleDescriptor::new(descriptor.module.clone()).with_type(descriptor);
                self.modules.push(module);
            }
        }
        self
    }

    /// 添加模块；同名模块的类型会被追加到已有模块
    pub fn add_module(&mut self, module: ModuleDescriptor) -> &mut Self {
        match self.modules.iter_mut().find(|m| m.name == module.name) {
            Some(existing) => existing.types.extend(module.types),
            None => self.modules.push(module),
        }
        self
    }

    /// 添加模块（构建器风格）
    #[must_use]
    pub fn with_module(mut self, module: ModuleDescriptor) -> Self {
        self.add_module(module);
        self
    }
}

impl TypeUniverse for TypeCatalog {
    fn modules(&self) -> &[ModuleDescriptor] {
        &self.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure_common::{ModuleName, TypeInfo};

    struct Alpha;
    struct Beta;
    struct Gamma;

    #[test]
    fn test_from_descriptors_groups_by_module() {
        let catalog = TypeCatalog::from_descriptors(vec![
            TypeDescriptor::of::<Alpha>("app::a"),
            TypeDescriptor::of::<Beta>("lib"),
            TypeDescriptor::of::<Gamma>("app::b"),
        ]);

        let names: Vec<_> = catalog.modules().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["app", "lib"]);

        let app = catalog.module(&ModuleName::new("app")).unwrap();
        let types: Vec<_> = app.types.iter().map(|t| t.info).collect();
        assert_eq!(types, vec![TypeInfo::of::<Alpha>(), TypeInfo::of::<Gamma>()]);
    }

    #[test]
    fn test_add_module_merges_same_name() {
        let catalog = TypeCatalog::new()
            .with_module(ModuleDescriptor::new("app").with_type(TypeDescriptor::of::<Alpha>("app")))
            .with_module(ModuleDescriptor::new("app").with_type(TypeDescriptor::of::<Beta>("app")));

        assert_eq!(catalog.modules().len(), 1);
        assert_eq!(catalog.type_count(), 2);
    }
}
