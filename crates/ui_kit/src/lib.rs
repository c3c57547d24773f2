//! Leptos renderer for the generic data table plus the primitive set it is
//! built from.
//!
//! The crate owns the reusable primitives, a centralized icon API, the
//! explicit theme context, and the stable `data-ui-*` DOM contract consumed by
//! the stylesheet layer. All table semantics (sorting, paging, actions, row
//! expansion) come from `table_contract`; this crate only turns its view model
//! into markup and forwards user interactions to caller callbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod capabilities;
mod icon;
mod primitives;
mod table;
mod theme;

pub use capabilities::{
    AccordionMode, AccordionState, DisclosureState, ModalState, Openable, Selectable, SwitchState,
    TabsState,
};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Accordion, AccordionItem, Badge, Button, ButtonShape, ButtonSize, ButtonVariant,
    DisclosurePanel, EmptyState, IconButton, Modal, NotificationDot, SelectField, SelectOption,
    Switch, Tab, TabList, Text, TextRole, TextTone,
};
pub use table::{
    DataTable, PaginationBar, PaginationConfig, RowExtra, SortingConfig, TableAction,
    TableColumn, TableColumns,
};
pub use theme::{provide_theme, use_theme, Density, Theme, ThemeMode, ThemeScope};

/// Convenience imports for application crates rendering tables.
pub mod prelude {
    pub use crate::{
        Accordion, AccordionItem, AccordionMode, Badge, Button, ButtonShape, ButtonSize,
        ButtonVariant, DataTable, Density, DisclosurePanel, EmptyState, Icon, IconButton,
        IconName, IconSize, Modal, NotificationDot, PaginationBar, PaginationConfig, RowExtra,
        SelectField, SelectOption, SortingConfig, Switch, Tab, TabList,
        TableAction, TableColumn, TableColumns, Text, TextRole, TextTone, Theme, ThemeMode,
        ThemeScope,
    };
    pub use table_contract::{
        ActionTone, NotificationIndicator, PageSize, PaginationState, SortCycle, SortDirection,
        SortState, TableConfig,
    };
}
