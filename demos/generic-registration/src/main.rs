//! # 泛型实现注册示例
//!
//! 演示如何通过 `#[discoverable]` 登记类型，再把开放泛型接口的所有实现注册到服务集合。

use clap::Parser;
use component_macros::discoverable;
use di_abstractions::SearchScope;
use di_impl::{add_generic_implementations, RegistrationSettings, ServiceCollection};
use infrastructure_common::{Lifetime, TypeRef};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "generic-registration")]
#[command(about = "扫描并注册开放泛型接口的实现")]
struct Args {
    /// 注册设置文件路径
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// 覆盖生命周期 (singleton / scoped / transient)
    #[arg(long)]
    lifetime: Option<Lifetime>,

    /// 覆盖搜索范围 (all / calling)
    #[arg(long)]
    scope: Option<SearchScope>,

    /// 以 JSON 格式输出日志
    #[arg(long)]
    json_logs: bool,
}

/// 仓储接口
pub trait Repository<T> {}

/// 消息处理器接口
pub trait MessageHandler<M> {}

/// 用户实体
pub struct User;

/// 订单实体
pub struct Order;

/// 心跳消息
pub struct Heartbeat;

#[discoverable(implements(Repository<User>, Repository<Order>))]
pub struct SqlRepository;

impl Repository<User> for SqlRepository {}

impl Repository<Order> for SqlRepository {}

#[discoverable(implements(Repository<Order>))]
struct InMemoryOrderRepository;

impl Repository<Order> for InMemoryOrderRepository {}

#[discoverable(implements(Repository<User>), abstract)]
pub struct CachedRepository;

impl Repository<User> for CachedRepository {}

#[discoverable(implements(MessageHandler<Heartbeat>))]
pub struct HeartbeatHandler;

impl MessageHandler<Heartbeat> for HeartbeatHandler {}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.json_logs);

    let mut settings = RegistrationSettings::load(args.settings.as_deref())?;
    if let Some(lifetime) = args.lifetime {
        settings.lifetime = lifetime;
    }
    if let Some(scope) = args.scope {
        settings.scope = scope;
    }
    info!("注册设置: {:?}", settings);

    let mut services = ServiceCollection::new();

    let repository = TypeRef::open::<dyn Repository<()>>();
    add_generic_implementations!(
        &mut services,
        Some(&repository),
        configure = |options| settings.apply(options)
    )?;

    let handler = TypeRef::open::<dyn MessageHandler<()>>();
    add_generic_implementations!(&mut services, Some(&handler), lifetime = Lifetime::Singleton)?;

    services.make_read_only();

    for descriptor in &services {
        info!("{}", descriptor);
    }
    info!("共注册 {} 个服务", services.len());

    Ok(())
}

/// 初始化日志，默认级别为 info，可通过 RUST_LOG 覆盖
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
