use crate::storage::Storage;
use std::sync::Arc;
use tracing::{error, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 连接数据库并完成迁移，失败时以非零状态退出
pub async fn prepare_server_startup() -> StartupContext {
    let storage = match crate::storage::create_storage().await {
        Ok(storage) => storage,
        Err(e) => {
            #[cfg(debug_assertions)]
            eprintln!("{}", e.format_colored());
            error!("Failed to create storage backend: {}", e);
            std::process::exit(1);
        }
    };
    warn!("Storage backend initialized and migrations completed");

    StartupContext { storage }
}
