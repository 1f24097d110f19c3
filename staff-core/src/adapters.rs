/// Implement `RecordService` for an adapter that exposes inherent
/// `_find_all` / `_get` / `_create` / `_update` / `_remove` methods and a
/// `capabilities` field.
///
/// ```ignore
/// staff_core::staff_adapter!(MemoryAdapter, Employee, Employee, EmployeePatch);
/// ```
#[macro_export]
macro_rules! staff_adapter {
    ($ty:ty, $rec:ty, $create:ty, $patch:ty) => {
        #[async_trait::async_trait]
        impl $crate::RecordService<$rec, $create, $patch> for $ty {
            fn capabilities(&self) -> $crate::ServiceCapabilities {
                self.capabilities.clone()
            }

            async fn find_all(&self) -> anyhow::Result<Vec<$rec>> {
                self._find_all().await
            }

            async fn get(&self, id: &str) -> anyhow::Result<Option<$rec>> {
                self._get(id).await
            }

            async fn create(&self, data: $create) -> anyhow::Result<$rec> {
                self._create(data).await
            }

            async fn update(&self, id: &str, patch: $patch) -> anyhow::Result<Option<$rec>> {
                self._update(id, patch).await
            }

            async fn remove(&self, id: &str) -> anyhow::Result<bool> {
                self._remove(id).await
            }
        }
    };
}
