//! ARIA roles, states, and classification predicates.

/// ARIA role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Landmark roles
    Banner,
    Complementary,
    ContentInfo,
    Form,
    Main,
    Navigation,
    Region,
    Search,

    // Widget roles
    Alert,
    AlertDialog,
    Button,
    Checkbox,
    Combobox,
    Dialog,
    GridCell,
    Link,
    Log,
    Listbox,
    Menu,
    MenuBar,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    OptionRole,
    ProgressBar,
    Radio,
    RadioGroup,
    ScrollBar,
    Slider,
    SpinButton,
    Status,
    Switch,
    Tab,
    TabList,
    TabPanel,
    TextBox,
    Timer,
    ToolTip,
    Tree,
    TreeGrid,
    TreeItem,

    // Document structure
    Article,
    Cell,
    ColumnHeader,
    Document,
    Figure,
    Grid,
    Group,
    Heading,
    Img,
    List,
    ListItem,
    Math,
    Note,
    Presentation,
    Row,
    RowGroup,
    RowHeader,
    Separator,
    Table,
    Toolbar,
}

impl AriaRole {
    /// Parse from a `role` attribute value.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "banner" => Self::Banner,
            "complementary" => Self::Complementary,
            "contentinfo" => Self::ContentInfo,
            "form" => Self::Form,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "region" => Self::Region,
            "search" => Self::Search,
            "alert" => Self::Alert,
            "alertdialog" => Self::AlertDialog,
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "combobox" => Self::Combobox,
            "dialog" => Self::Dialog,
            "gridcell" => Self::GridCell,
            "link" => Self::Link,
            "log" => Self::Log,
            "listbox" => Self::Listbox,
            "menu" => Self::Menu,
            "menubar" => Self::MenuBar,
            "menuitem" => Self::MenuItem,
            "menuitemcheckbox" => Self::MenuItemCheckbox,
            "menuitemradio" => Self::MenuItemRadio,
            "option" => Self::OptionRole,
            "progressbar" => Self::ProgressBar,
            "radio" => Self::Radio,
            "radiogroup" => Self::RadioGroup,
            "scrollbar" => Self::ScrollBar,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "status" => Self::Status,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "tablist" => Self::TabList,
            "tabpanel" => Self::TabPanel,
            "textbox" => Self::TextBox,
            "timer" => Self::Timer,
            "tooltip" => Self::ToolTip,
            "tree" => Self::Tree,
            "treegrid" => Self::TreeGrid,
            "treeitem" => Self::TreeItem,
            "article" => Self::Article,
            "cell" => Self::Cell,
            "columnheader" => Self::ColumnHeader,
            "document" => Self::Document,
            "figure" => Self::Figure,
            "grid" => Self::Grid,
            "group" => Self::Group,
            "heading" => Self::Heading,
            "img" => Self::Img,
            "list" => Self::List,
            "listitem" => Self::ListItem,
            "math" => Self::Math,
            "note" => Self::Note,
            "none" | "presentation" => Self::Presentation,
            "row" => Self::Row,
            "rowgroup" => Self::RowGroup,
            "rowheader" => Self::RowHeader,
            "separator" => Self::Separator,
            "table" => Self::Table,
            "toolbar" => Self::Toolbar,
            _ => return None,
        })
    }

    /// Control widget roles: directly interactive, not merely structural.
    pub fn is_widget(self) -> bool {
        matches!(
            self,
            Self::Button
                | Self::Checkbox
                | Self::Combobox
                | Self::Listbox
                | Self::Menu
                | Self::MenuBar
                | Self::MenuItem
                | Self::MenuItemCheckbox
                | Self::MenuItemRadio
                | Self::OptionRole
                | Self::Radio
                | Self::RadioGroup
                | Self::ScrollBar
                | Self::Slider
                | Self::SpinButton
                | Self::Switch
                | Self::Tab
                | Self::TabList
                | Self::TextBox
                | Self::Tree
                | Self::TreeGrid
                | Self::TreeItem
        )
    }

    /// Composite controls manage focus among descendants, either through
    /// focusable children or an active-descendant relation.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            Self::Combobox
                | Self::Grid
                | Self::Listbox
                | Self::Menu
                | Self::MenuBar
                | Self::RadioGroup
                | Self::TabList
                | Self::Tree
                | Self::TreeGrid
        )
    }

    /// Landmark roles.
    pub fn is_landmark(self) -> bool {
        matches!(
            self,
            Self::Banner
                | Self::Complementary
                | Self::ContentInfo
                | Self::Form
                | Self::Main
                | Self::Navigation
                | Self::Region
                | Self::Search
        )
    }

    /// Roles announced as one atomic unit; traversal never descends into
    /// them.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::Button
                | Self::Checkbox
                | Self::Img
                | Self::Math
                | Self::ProgressBar
                | Self::Radio
                | Self::ScrollBar
                | Self::Separator
                | Self::Slider
                | Self::SpinButton
                | Self::Switch
        )
    }

    pub fn is_grid(self) -> bool {
        matches!(self, Self::Grid | Self::TreeGrid)
    }
}

/// Tri-state attribute value (true / false / mixed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    True,
    False,
    Mixed,
}

impl TriState {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }
}

/// State classifications the role layer reports for a node. The navigation
/// core translates these into localizable message identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaStateMsg {
    Checked(TriState),
    Selected(bool),
    Expanded(bool),
    Pressed(TriState),
    Required,
    Invalid,
    HasPopup,
    /// Declared position within a set, one-based.
    SetPosition { index: u32, total: u32 },
}
