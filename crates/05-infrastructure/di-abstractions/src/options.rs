//! 泛型实现注册选项

use infrastructure_common::{ConfigError, Lifetime, ModuleDescriptor, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 类型排除谓词
pub type TypePredicate = Box<dyn Fn(&TypeDescriptor) -> bool + Send + Sync>;

/// 模块排除谓词
pub type ModulePredicate = Box<dyn Fn(&ModuleDescriptor) -> bool + Send + Sync>;

/// 类型搜索范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// 所有已加载的模块
    #[default]
    AllLoadedModules,
    /// 仅调用注册入口的模块
    CallingModuleOnly,
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllLoadedModules => f.write_str("all_loaded_modules"),
            Self::CallingModuleOnly => f.write_str("calling_module_only"),
        }
    }
}

impl FromStr for SearchScope {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "all_loaded_modules" | "all" => Ok(Self::AllLoadedModules),
            "calling_module_only" | "calling" => Ok(Self::CallingModuleOnly),
            other => Err(ConfigError::type_conversion(format!(
                "未知的搜索范围: {other}"
            ))),
        }
    }
}

/// 注册选项
///
/// 先以默认值构造，再由配置回调修改一次，扫描开始后只读。
/// 每次注册调用持有自己的实例。
#[derive(Default)]
pub struct RegistrationOptions {
    lifetime: Lifetime,
    scope: SearchScope,
    type_exclusions: Vec<TypePredicate>,
    module_exclusions: Vec<ModulePredicate>,
}

impl RegistrationOptions {
    /// 创建默认选项：瞬时生命周期、所有已加载模块、无排除条件
    pub fn new() -> Self {
        Self::default()
    }

    /// 生命周期
    pub const fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// 搜索范围
    pub const fn scope(&self) -> SearchScope {
        self.scope
    }

    /// 设置生命周期
    pub fn set_lifetime(&mut self, lifetime: Lifetime) -> &mut Self {
        self.lifetime = lifetime;
        self
    }

    /// 设置搜索范围
    pub fn set_scope(&mut self, scope: SearchScope) -> &mut Self {
        self.scope = scope;
        self
    }

    /// 添加类型排除谓词
    pub fn exclude_types<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&TypeDescriptor) -> bool + Send + Sync + 'static,
    {
        self.type_exclusions.push(Box::new(predicate));
        self
    }

    /// 添加模块排除谓词，仅在 [`SearchScope::AllLoadedModules`] 下生效
    pub fn exclude_modules<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&ModuleDescriptor) -> bool + Send + Sync + 'static,
    {
        self.module_exclusions.push(Box::new(predicate));
        self
    }

    /// 设置生命周期（构建器风格）
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// 设置搜索范围（构建器风格）
    #[must_use]
    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// 添加类型排除谓词（构建器风格）
    #[must_use]
    pub fn with_type_exclusion<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&TypeDescriptor) -> bool + Send + Sync + 'static,
    {
        self.exclude_types(predicate);
        self
    }

    /// 添加模块排除谓词（构建器风格）
    #[must_use]
    pub fn with_module_exclusion<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&ModuleDescriptor) -> bool + Send + Sync + 'static,
    {
        self.exclude_modules(predicate);
        self
    }

    /// 任一类型谓词返回 true 即排除
    pub fn is_type_excluded(&self, descriptor: &TypeDescriptor) -> bool {
        self.type_exclusions.iter().any(|predicate| predicate(descriptor))
    }

    /// 任一模块谓词返回 true 即排除
    pub fn is_module_excluded(&self, module: &ModuleDescriptor) -> bool {
        self.module_exclusions.iter().any(|predicate| predicate(module))
    }

    /// 类型排除谓词数量
    pub fn type_exclusion_count(&self) -> usize {
        self.type_exclusions.len()
    }

    /// 模块排除谓词数量
    pub fn module_exclusion_count(&self) -> usize {
        self.module_exclusions.len()
    }
}

impl fmt::Debug for RegistrationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationOptions")
            .field("lifetime", &self.lifetime)
            .field("scope", &self.scope)
            .field("type_exclusions", &self.type_exclusions.len())
            .field("module_exclusions", &self.module_exclusions.len())
            .finish()
    }
}
