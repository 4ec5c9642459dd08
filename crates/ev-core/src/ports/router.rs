use crate::bootstrap::Destination;

/// Top-level navigation.
///
/// `replace_root` replaces the navigation stack; the previous screen must not
/// stay reachable through back navigation. Calling it twice for one launch is
/// a caller bug, not something implementations guard against.
///
/// 顶层导航端口。
pub trait RouterPort: Send + Sync {
    fn replace_root(&self, destination: Destination);
}
