use tokio_util::sync::CancellationToken;

/// Generation tag of one async operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    RevisionsProbe,
    TenantBootstrap,
}

/// Task lifecycle state (stored in `PanelState`, mutated only by the reducer).
///
/// At most one task per kind is current. Starting a task supersedes the
/// previous one, whose completion is then rejected by `finish_if_active`.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, id: TaskId, cancel: Option<CancellationToken>) {
        self.active = Some(id);
        self.cancel = cancel;
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub revisions_probe: TaskState,
    pub tenant_bootstrap: TaskState,
}

impl Tasks {
    pub fn is_any_running(&self) -> bool {
        self.revisions_probe.is_running() || self.tenant_bootstrap.is_running()
    }
}
