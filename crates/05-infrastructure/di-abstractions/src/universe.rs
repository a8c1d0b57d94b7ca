//! 类型宇宙抽象接口
//!
//! 提供已加载模块及其类型描述符的枚举能力

use infrastructure_common::{ModuleDescriptor, ModuleName};

/// 类型宇宙 trait
///
/// 枚举当前已加载的模块，以及每个模块中声明的类型。
pub trait TypeUniverse {
    /// 所有已加载的模块，按加载顺序排列
    fn modules(&self) -> &[ModuleDescriptor];

    /// 按名称查找模块
    fn module(&self, name: &ModuleName) -> Option<&ModuleDescriptor> {
        self.modules().iter().find(|module| &module.name == name)
    }

    /// 类型总数
    fn type_count(&self) -> usize {
        self.modules().iter().map(|module| module.types.len()).sum()
    }
}

impl<U: TypeUniverse + ?Sized> TypeUniverse for &U {
    fn modules(&self) -> &[ModuleDescriptor] {
        (**self).modules()
    }
}

impl TypeUniverse for [ModuleDescriptor] {
    fn modules(&self) -> &[ModuleDescriptor] {
        self
    }
}

impl TypeUniverse for Vec<ModuleDescriptor> {
    fn modules(&self) -> &[ModuleDescriptor] {
        self
    }
}
