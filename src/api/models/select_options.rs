/// Query options accepted by the record list endpoint. Everything here is optional and the
/// defaults leave the query string empty, which asks the service for every record in the table in
/// its own ordering.
#[derive(Clone, Debug, Default)]
pub struct SelectOptions {
    /// Restrict the returned field mapping to these field names.
    pub fields: Vec<String>,

    /// Formula the service evaluates against each record, only matches are returned.
    pub filter_by_formula: Option<String>,

    /// Hard cap on the total number of records returned across all pages.
    pub max_records: Option<u32>,

    /// Records per page, the service caps this at 100.
    pub page_size: Option<u16>,

    pub sort: Vec<SortField>,

    /// Name or identifier of a view, records come back in the view's order with its filters
    /// applied.
    pub view: Option<String>,

    pub cell_format: Option<CellFormat>,
}

#[derive(Clone, Debug)]
pub struct SortField {
    pub field: String,
    pub direction: SortDirection,
}

impl SortField {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellFormat {
    Json,
    String,
}

impl CellFormat {
    fn as_param(&self) -> &'static str {
        match self {
            CellFormat::Json => "json",
            CellFormat::String => "string",
        }
    }
}

impl SelectOptions {
    /// Encodes the options in the bracketed query parameter style the service expects.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        for field in &self.fields {
            params.push(("fields[]".to_string(), field.clone()));
        }

        if let Some(formula) = &self.filter_by_formula {
            params.push(("filterByFormula".to_string(), formula.clone()));
        }

        if let Some(max_records) = self.max_records {
            params.push(("maxRecords".to_string(), max_records.to_string()));
        }

        if let Some(page_size) = self.page_size {
            params.push(("pageSize".to_string(), page_size.to_string()));
        }

        for (index, sort) in self.sort.iter().enumerate() {
            params.push((format!("sort[{index}][field]"), sort.field.clone()));
            params.push((
                format!("sort[{index}][direction]"),
                sort.direction.as_param().to_string(),
            ));
        }

        if let Some(view) = &self.view {
            params.push(("view".to_string(), view.clone()));
        }

        if let Some(cell_format) = self.cell_format {
            params.push(("cellFormat".to_string(), cell_format.as_param().to_string()));
        }

        params
    }
}
