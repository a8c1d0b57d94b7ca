//! 注册设置
//!
//! 从配置文件和环境变量加载注册选项，通过 [`RegistrationSettings::apply`]
//! 接入配置回调。
//!
//! ```toml
//! lifetime = "scoped"
//! scope = "all_loaded_modules"
//! public_only = true
//! exclude_modules = ["legacy"]
//! exclude_type_prefixes = ["app::experimental::"]
//! ```
//!
//! 环境变量前缀为 `GENERIC_DI`，例如 `GENERIC_DI__LIFETIME=singleton`，
//! 列表以逗号分隔。

use di_abstractions::{filters, RegistrationOptions, SearchScope};
use infrastructure_common::{ConfigError, ConfigResult, Lifetime};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "GENERIC_DI";

/// 注册设置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationSettings {
    /// 生命周期
    pub lifetime: Lifetime,
    /// 搜索范围
    pub scope: SearchScope,
    /// 只注册公开类型
    pub public_only: bool,
    /// 排除的模块名称
    pub exclude_modules: Vec<String>,
    /// 排除的类型名称前缀
    pub exclude_type_prefixes: Vec<String>,
}

impl RegistrationSettings {
    /// 从可选的配置文件和环境变量加载设置，环境变量优先
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                });
            }
            info!("加载注册设置: {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("exclude_modules")
                .with_list_parse_key("exclude_type_prefixes"),
        );

        Self::build(builder)
    }

    /// 从 TOML 文本解析设置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml));
        Self::build(builder)
    }

    /// 序列化为 TOML 文本
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            source: Box::new(e),
        })
    }

    /// 校验设置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.exclude_modules.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::validation("exclude_modules 包含空名称"));
        }
        if self
            .exclude_type_prefixes
            .iter()
            .any(|prefix| prefix.trim().is_empty())
        {
            return Err(ConfigError::validation("exclude_type_prefixes 包含空前缀"));
        }
        Ok(())
    }

    /// 将设置应用到注册选项
    pub fn apply(&self, options: &mut RegistrationOptions) {
        options.set_lifetime(self.lifetime).set_scope(self.scope);

        if self.public_only {
            options.exclude_types(filters::non_public);
        }
        for name in &self.exclude_modules {
            options.exclude_modules(filters::module_named(name.clone()));
        }
        for prefix in &self.exclude_type_prefixes {
            options.exclude_types(filters::type_name_starts_with(prefix.clone()));
        }

        debug!("应用注册设置: {:?}", options);
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> ConfigResult<Self> {
        let settings: Self = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ConfigError::ParseError {
                source: Box::new(e),
            })?;
        settings.validate()?;
        Ok(settings)
    }
}
