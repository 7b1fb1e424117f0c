//! In-Memory Table
//!
//! 单个实体类型的进程内存储：DashMap 保存行，AtomicU64 分配 id

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::application::ports::RepositoryError;
use crate::domain::EntityId;

/// 内存表
///
/// 不变量:
/// - id 从 1 开始，每次插入恰好递增一次，删除后不复用
/// - 同一 id 的修改/删除在 DashMap 分片锁内完成，对该 id 的读取是原子的
pub struct InMemoryTable<T> {
    rows: DashMap<EntityId, T>,
    next_id: AtomicU64,
}

impl<T: Clone> InMemoryTable<T> {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    #[cfg(test)]
    fn starting_at(first_id: EntityId) -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicU64::new(first_id),
        }
    }

    /// 分配 id，用 `build` 构造行并插入
    ///
    /// 计数器到达 `EntityId::MAX` 后不再分配，返回
    /// [`RepositoryError::IdSpaceExhausted`]，存储保持不变
    pub fn insert_with(&self, build: impl FnOnce(EntityId) -> T) -> Result<T, RepositoryError> {
        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|last| RepositoryError::IdSpaceExhausted { last_id: last - 1 })?;
        let row = build(id);
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    pub fn get(&self, id: EntityId) -> Option<T> {
        self.rows.get(&id).map(|r| r.value().clone())
    }

    /// 按 id 升序返回所有行
    pub fn all(&self) -> Vec<T> {
        let mut rows: Vec<(EntityId, T)> = self
            .rows
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        rows.sort_unstable_by_key(|(id, _)| *id);
        rows.into_iter().map(|(_, row)| row).collect()
    }

    /// 在持有该行写锁期间修改，返回修改后的副本
    pub fn modify(&self, id: EntityId, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut entry = self.rows.get_mut(&id)?;
        f(entry.value_mut());
        Some(entry.value().clone())
    }

    pub fn remove(&self, id: EntityId) -> Option<T> {
        self.rows.remove(&id).map(|(_, row)| row)
    }
}

impl<T: Clone> Default for InMemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
