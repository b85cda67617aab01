use std::fmt;
use std::str::FromStr;

use sea_orm::Order;

use crate::entity::blog;

/// Blog property a page can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogSortField {
    Id,
    Name,
    UserId,
}

impl BlogSortField {
    pub(crate) fn column(self) -> blog::Column {
        match self {
            BlogSortField::Id => blog::Column::Id,
            BlogSortField::Name => blog::Column::Name,
            BlogSortField::UserId => blog::Column::UserId,
        }
    }
}

impl FromStr for BlogSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(BlogSortField::Id),
            "name" => Ok(BlogSortField::Name),
            "userId" | "user_id" | "user.id" => Ok(BlogSortField::UserId),
            other => Err(format!(
                "Unknown sort property '{other}'; expected one of: id, name, userId"
            )),
        }
    }
}

impl fmt::Display for BlogSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlogSortField::Id => "id",
            BlogSortField::Name => "name",
            BlogSortField::UserId => "userId",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl From<Direction> for Order {
    fn from(d: Direction) -> Self {
        match d {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: BlogSortField,
    pub direction: Direction,
}

/// Parses a `property[,asc|desc]` sort parameter.
impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let field = parts.next().unwrap_or_default().parse()?;
        let direction = match parts.next() {
            None => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => Direction::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
            Some(d) => return Err(format!("Unknown sort direction '{d}'; expected asc or desc")),
        };
        if parts.next().is_some() {
            return Err(format!("Malformed sort parameter '{s}'"));
        }
        Ok(SortOrder { field, direction })
    }
}

/// A page request: zero-based page index, page size and sort orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pageable {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<SortOrder>,
}

impl Pageable {
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: Vec::new(),
        }
    }

    pub fn sorted_by(mut self, field: BlogSortField, direction: Direction) -> Self {
        self.sort.push(SortOrder { field, direction });
        self
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// Number of pages needed to hold `total` rows (0 when there are none).
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.size)
    }
}
