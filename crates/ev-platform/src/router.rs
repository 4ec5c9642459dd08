use tokio::sync::mpsc;
use tracing::{info, warn};

use ev_core::bootstrap::Destination;
use ev_core::ports::RouterPort;

/// Router that forwards root replacements to whoever renders them.
///
/// 将根路由替换转发给渲染端的路由器。
pub struct ChannelRouter {
    tx: mpsc::UnboundedSender<Destination>,
}

impl ChannelRouter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Destination>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl RouterPort for ChannelRouter {
    fn replace_root(&self, destination: Destination) {
        info!(?destination, "replacing navigation root");
        if self.tx.send(destination).is_err() {
            warn!(?destination, "navigation receiver dropped, destination lost");
        }
    }
}
