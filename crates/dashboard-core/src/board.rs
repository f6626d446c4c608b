//! Task Board
//!
//! Team members as kanban columns, each owning an ordered list of tasks.
//! Members and tasks are never reordered automatically; only `move_task`
//! changes positions.

use serde::{Deserialize, Serialize};

use crate::entity::{DomainError, DomainResult, EntityId};
use crate::require_text;

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: EntityId, title: impl Into<String>) -> Self {
        Self { id, title: title.into(), completed: false }
    }
}

/// A board column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: EntityId,
    pub name: String,
    pub tasks: Vec<Task>,
}

impl TeamMember {
    pub fn new(id: EntityId, name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self { id, name: name.into(), tasks }
    }

    /// (completed, total)
    pub fn tally(&self) -> (usize, usize) {
        let done = self.tasks.iter().filter(|t| t.completed).count();
        (done, self.tasks.len())
    }

    fn task_index(&self, task_id: EntityId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }
}

/// The whole board. Every operation returns a new board; `self` is left
/// as it was, including on error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBoard {
    members: Vec<TeamMember>,
}

impl TaskBoard {
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn member(&self, member_id: EntityId) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == member_id)
    }

    /// Largest id held by any member or task
    pub fn max_id(&self) -> u64 {
        self.members
            .iter()
            .flat_map(|m| std::iter::once(m.id).chain(m.tasks.iter().map(|t| t.id)))
            .map(EntityId::get)
            .max()
            .unwrap_or(0)
    }

    /// Rebuild the member list with `member_id` replaced by `f`'s result.
    fn map_member<F>(&self, member_id: EntityId, f: F) -> DomainResult<Self>
    where
        F: FnOnce(&TeamMember) -> DomainResult<TeamMember>,
    {
        let index = self
            .members
            .iter()
            .position(|m| m.id == member_id)
            .ok_or_else(|| DomainError::NotFound(format!("member {}", member_id)))?;
        let replacement = f(&self.members[index])?;
        let mut members = self.members.clone();
        members[index] = replacement;
        Ok(Self { members })
    }

    pub fn add_task(&self, member_id: EntityId, title: &str, task_id: EntityId) -> DomainResult<Self> {
        let title = require_text(title, "task title")?;
        let next = self.map_member(member_id, |member| {
            let mut member = member.clone();
            member.tasks.push(Task::new(task_id, title.clone()));
            Ok(member)
        })?;
        log::debug!("added task {} to member {}", task_id, member_id);
        Ok(next)
    }

    pub fn toggle_completion(&self, member_id: EntityId, task_id: EntityId) -> DomainResult<Self> {
        self.map_member(member_id, |member| {
            let index = member
                .task_index(task_id)
                .ok_or_else(|| DomainError::NotFound(format!("task {}", task_id)))?;
            let mut member = member.clone();
            let task = &mut member.tasks[index];
            task.completed = !task.completed;
            Ok(member)
        })
    }

    pub fn remove_task(&self, member_id: EntityId, task_id: EntityId) -> DomainResult<Self> {
        let next = self.map_member(member_id, |member| {
            let index = member
                .task_index(task_id)
                .ok_or_else(|| DomainError::NotFound(format!("task {}", task_id)))?;
            let mut member = member.clone();
            member.tasks.remove(index);
            Ok(member)
        })?;
        log::debug!("removed task {} from member {}", task_id, member_id);
        Ok(next)
    }

    pub fn rename_member(&self, member_id: EntityId, new_name: &str) -> DomainResult<Self> {
        let name = require_text(new_name, "member name")?;
        self.map_member(member_id, |member| {
            Ok(TeamMember {
                name: name.clone(),
                ..member.clone()
            })
        })
    }

    /// Move a task to `to_member` at `position` (clamped to the column
    /// length after removal). Works within a single column too.
    pub fn move_task(&self, task_id: EntityId, to_member: EntityId, position: usize) -> DomainResult<Self> {
        if self.member(to_member).is_none() {
            return Err(DomainError::NotFound(format!("member {}", to_member)));
        }
        let (from_index, task_index) = self
            .members
            .iter()
            .enumerate()
            .find_map(|(mi, m)| m.task_index(task_id).map(|ti| (mi, ti)))
            .ok_or_else(|| DomainError::NotFound(format!("task {}", task_id)))?;

        let mut members = self.members.clone();
        let task = members[from_index].tasks.remove(task_index);
        let target = members
            .iter_mut()
            .find(|m| m.id == to_member)
            .ok_or_else(|| DomainError::NotFound(format!("member {}", to_member)))?;
        let at = position.min(target.tasks.len());
        target.tasks.insert(at, task);

        log::debug!("moved task {} to member {} at {}", task_id, to_member, at);
        Ok(Self { members })
    }
}
