/// Table layout options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// Element id prefix; keep it unique per table on screen.
    pub id: String,
    /// Whether the header may pin to the viewport.
    pub sticky: bool,
    /// Viewport line the header is pinned to.
    pub sticky_top: i16,
    /// Width of the selection column, padding included.
    pub operation_width: u16,
    /// Width of the menu column, padding included.
    pub menu_width: u16,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            id: "data-table".into(),
            sticky: true,
            sticky_top: 0,
            operation_width: 5,
            menu_width: 3,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    pub fn sticky_top(mut self, top: i16) -> Self {
        self.sticky_top = top;
        self
    }

    pub fn operation_width(mut self, width: u16) -> Self {
        self.operation_width = width;
        self
    }

    pub fn menu_width(mut self, width: u16) -> Self {
        self.menu_width = width;
        self
    }
}
