//! Page and sort requests for listing work items.
//!
//! Sort fields come from a closed set so the database layer can splice the
//! column name into `ORDER BY` without touching raw request input.

use std::str::FromStr;

use crate::error::CoreError;

/// Default zero-based page number.
pub const DEFAULT_PAGE_NO: u32 = 0;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    /// Accepts `ASC` / `DESC` in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(CoreError::Validation(format!(
                "Invalid sort direction: '{s}'. Expected ASC or DESC"
            )))
        }
    }
}

/// Work fields a list can be sorted by, named as they appear in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkSortField {
    #[default]
    Id,
    WorkName,
    StartDate,
    EndDate,
    Status,
}

impl WorkSortField {
    const ALL: [WorkSortField; 5] = [
        WorkSortField::Id,
        WorkSortField::WorkName,
        WorkSortField::StartDate,
        WorkSortField::EndDate,
        WorkSortField::Status,
    ];

    /// JSON field name, also the accepted `sortBy` value.
    pub fn as_str(self) -> &'static str {
        match self {
            WorkSortField::Id => "id",
            WorkSortField::WorkName => "workName",
            WorkSortField::StartDate => "startDate",
            WorkSortField::EndDate => "endDate",
            WorkSortField::Status => "status",
        }
    }

    /// Column name in the `works` table.
    pub fn column(self) -> &'static str {
        match self {
            WorkSortField::Id => "id",
            WorkSortField::WorkName => "work_name",
            WorkSortField::StartDate => "start_date",
            WorkSortField::EndDate => "end_date",
            WorkSortField::Status => "status",
        }
    }
}

impl FromStr for WorkSortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkSortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = WorkSortField::ALL.iter().map(|f| f.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid sort field: '{s}'. Valid fields: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// One page of a sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_no: u32,
    pub page_size: u32,
    pub sort_by: WorkSortField,
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_no: DEFAULT_PAGE_NO,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: WorkSortField::default(),
            direction: SortDirection::default(),
        }
    }
}

impl PageRequest {
    /// Build a page request from optional raw inputs, applying defaults.
    ///
    /// An empty sort field or direction counts as absent. Fails on a zero
    /// page size or an unrecognised sort field/direction.
    pub fn from_parts(
        page_no: Option<u32>,
        page_size: Option<u32>,
        sort_by: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Self, CoreError> {
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(CoreError::Validation(
                "pageSize must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            page_no: page_no.unwrap_or(DEFAULT_PAGE_NO),
            page_size,
            sort_by: sort_by
                .filter(|s| !s.is_empty())
                .map(str::parse::<WorkSortField>)
                .transpose()?
                .unwrap_or_default(),
            direction: direction
                .filter(|s| !s.is_empty())
                .map(str::parse::<SortDirection>)
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// Number of rows to skip: `page_no * page_size`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_no) * u64::from(self.page_size)
    }
}
