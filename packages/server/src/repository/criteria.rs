use sea_orm::sea_query::{Alias, Condition, Expr, ExprTrait, LikeExpr};

use crate::entity::blog;

/// Filter applied to the aliased blog table of the join query.
///
/// Every variant is compiled into a bound parameter, never into SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogCriteria {
    IdEquals(i64),
    NameEquals(String),
    /// Case-sensitive substring match on `name`.
    NameContains(String),
    UserIdEquals(i64),
    UserIsNull,
    /// Conjunction of all nested criteria. An empty list matches every row.
    All(Vec<BlogCriteria>),
}

impl BlogCriteria {
    pub fn and(self, other: BlogCriteria) -> BlogCriteria {
        match self {
            BlogCriteria::All(mut parts) => {
                parts.push(other);
                BlogCriteria::All(parts)
            }
            first => BlogCriteria::All(vec![first, other]),
        }
    }

    pub(crate) fn into_condition(self, table: &str) -> Condition {
        let col = |c: blog::Column| Expr::col((Alias::new(table), c));

        match self {
            BlogCriteria::IdEquals(id) => Condition::all().add(col(blog::Column::Id).eq(id)),
            BlogCriteria::NameEquals(name) => {
                Condition::all().add(col(blog::Column::Name).eq(name))
            }
            BlogCriteria::NameContains(term) => Condition::all().add(
                col(blog::Column::Name)
                    .like(LikeExpr::new(format!("%{}%", escape_like(&term))).escape('\\')),
            ),
            BlogCriteria::UserIdEquals(user_id) => {
                Condition::all().add(col(blog::Column::UserId).eq(user_id))
            }
            BlogCriteria::UserIsNull => Condition::all().add(col(blog::Column::UserId).is_null()),
            BlogCriteria::All(parts) => parts
                .into_iter()
                .fold(Condition::all(), |cond, part| {
                    cond.add(part.into_condition(table))
                }),
        }
    }
}

/// Escape LIKE wildcard characters in a search string.
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
