//! カテゴリ絞り込み通知チャネル
//!
//! スキルカードなど他のセクションからギャラリーへ絞り込みを依頼する。
//! グローバルなイベントではなく、生成時に受け渡すハンドルで接続する。
//! 購読解除は `Subscription` のdropで行う。

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Listener = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// 絞り込み通知チャネル（cloneは同じチャネルを指す）
#[derive(Clone, Default)]
pub struct FilterBus {
    registry: Arc<Mutex<Registry>>,
}

impl FilterBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// リスナーを登録する。戻り値をdropすると解除される。
    #[must_use = "dropping the Subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        log::debug!("filter bus: listener {} subscribed", id);

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// 全リスナーへ通知し、届いた数を返す
    ///
    /// 通知中に解除されたリスナーには届かない。
    pub fn publish(&self, category: &str) -> usize {
        // コールバック内での publish/subscribe に備えてロック外で呼ぶ
        let snapshot: Vec<(u64, Listener)> = lock(&self.registry)
            .listeners
            .iter()
            .map(|(id, l)| (*id, Arc::clone(l)))
            .collect();

        let mut reached = 0;
        for (id, listener) in &snapshot {
            let alive = lock(&self.registry)
                .listeners
                .iter()
                .any(|(live, _)| live == id);
            if !alive {
                log::debug!("filter bus: listener {} removed during publish", id);
                continue;
            }
            listener(category);
            reached += 1;
        }

        log::debug!(
            "filter bus: published '{}' to {} listener(s)",
            category,
            reached
        );
        reached
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

impl fmt::Debug for FilterBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// 購読ハンドル
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// 明示的に解除する（dropと同じ）
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.retain(|(id, _)| *id != self.id);
            log::debug!("filter bus: listener {} unsubscribed", self.id);
        }
    }
}
