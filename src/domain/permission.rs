//! List access evaluation
//!
//! Decides how, if at all, a user may act on a todo list. Pure: callers load
//! the list and its coauthorships first.

use serde::Serialize;

use crate::domain::coauthorship::Coauthorship;
use crate::domain::todo_list::TodoList;
use crate::domain::user::User;

/// Why access to a list was granted, or that it was not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Owner,
    Coauthor,
    Admin,
    Denied,
}

impl Access {
    pub fn is_granted(&self) -> bool {
        !matches!(self, Self::Denied)
    }
}

/// Evaluate access of `user` to `list`
///
/// Admin wins over ownership, ownership over coauthorship. Anonymous callers
/// are always denied. Coauthorships for other lists are ignored.
pub fn evaluate_access(
    user: Option<&User>,
    list: &TodoList,
    coauthorships: &[Coauthorship],
) -> Access {
    let Some(user) = user else {
        return Access::Denied;
    };

    if user.is_admin() {
        return Access::Admin;
    }

    if list.is_created_by(user.id()) {
        return Access::Owner;
    }

    if coauthorships.iter().any(|c| c.links(list.id(), user.id())) {
        return Access::Coauthor;
    }

    Access::Denied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todo_list::TodoListId;
    use crate::domain::user::{Role, UserId};

    fn user(id: &str) -> User {
        User::new(UserId::new(id).unwrap(), id, "hash")
    }

    fn list_of(owner: &User) -> TodoList {
        TodoList::new(TodoListId::generate(), "Groceries", None, owner.id().clone())
    }

    #[test]
    fn test_owner() {
        let alice = user("alice");
        let list = list_of(&alice);

        assert_eq!(evaluate_access(Some(&alice), &list, &[]), Access::Owner);
    }

    #[test]
    fn test_coauthor() {
        let alice = user("alice");
        let bob = user("bob");
        let list = list_of(&alice);
        let grants = vec![Coauthorship::new(list.id().clone(), bob.id().clone())];

        assert_eq!(evaluate_access(Some(&bob), &list, &grants), Access::Coauthor);
    }

    #[test]
    fn test_admin_regardless_of_ownership() {
        let alice = user("alice");
        let root = user("root").with_role(Role::admin());
        let list = list_of(&alice);

        assert_eq!(evaluate_access(Some(&root), &list, &[]), Access::Admin);

        let own = list_of(&root);
        assert_eq!(evaluate_access(Some(&root), &own, &[]), Access::Admin);
    }

    #[test]
    fn test_unrelated_user_denied() {
        let alice = user("alice");
        let mallory = user("mallory").with_role(Role::new("Editor"));
        let list = list_of(&alice);

        let access = evaluate_access(Some(&mallory), &list, &[]);
        assert_eq!(access, Access::Denied);
        assert!(!access.is_granted());
    }

    #[test]
    fn test_grant_on_other_list_ignored() {
        let alice = user("alice");
        let bob = user("bob");
        let list = list_of(&alice);
        let grants = vec![Coauthorship::new(TodoListId::generate(), bob.id().clone())];

        assert_eq!(evaluate_access(Some(&bob), &list, &grants), Access::Denied);
    }

    #[test]
    fn test_anonymous_denied() {
        let alice = user("alice");
        let list = list_of(&alice);

        assert_eq!(evaluate_access(None, &list, &[]), Access::Denied);
    }
}
