use std::rc::Rc;

use crate::{
    AnnotatedString, Arrangement, Color, IconKind, ImageFit, ImageSource, Modifier, TextStyle,
};

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type CallbackBool = Rc<dyn Fn(bool)>;
pub type CallbackString = Rc<dyn Fn(String)>;
pub type CallbackOffset = Rc<dyn Fn(usize)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyboardType {
    #[default]
    Text,
    Email,
    Password,
}

impl KeyboardType {
    /// What a field shows for `value`: password fields are masked one bullet
    /// per character.
    pub fn display(self, value: &str) -> String {
        match self {
            KeyboardType::Password => "\u{2022}".repeat(value.chars().count()),
            _ => value.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    Filled,
    Text,
    Icon,
}

#[derive(Clone)]
pub enum ViewKind {
    Surface {
        color: Color,
    },
    Box,
    Row {
        arrangement: Arrangement,
    },
    Column {
        arrangement: Arrangement,
    },
    LazyRow {
        arrangement: Arrangement,
    },
    LazyColumn {
        arrangement: Arrangement,
    },
    Spacer,
    Text {
        text: String,
        color: Color,
        style: TextStyle,
    },
    ClickableText {
        text: AnnotatedString,
        color: Color,
        style: TextStyle,
        on_click: Option<CallbackOffset>,
    },
    Image {
        source: ImageSource,
        description: Option<String>,
        fit: ImageFit,
    },
    Icon {
        icon: IconKind,
        description: Option<String>,
        tint: Color,
    },
    Button {
        style: ButtonStyle,
        background: Color,
        on_click: Option<Callback>,
    },
    TextField {
        value: String,
        label: String,
        keyboard: KeyboardType,
        leading_icon: Option<IconKind>,
        on_change: Option<CallbackString>,
        on_submit: Option<CallbackString>,
    },
    Checkbox {
        checked: bool,
        checkmark: Color,
        on_change: Option<CallbackBool>,
    },
    Divider {
        color: Color,
        thickness: f32,
    },
    BottomNavigation {
        background: Color,
    },
    BottomNavigationItem {
        selected: bool,
        label: String,
        icon: IconKind,
        on_click: Option<Callback>,
    },
}

impl ViewKind {
    /// Short node name, as shown by the inspector.
    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Surface { .. } => "Surface",
            ViewKind::Box => "Box",
            ViewKind::Row { .. } => "Row",
            ViewKind::Column { .. } => "Column",
            ViewKind::LazyRow { .. } => "LazyRow",
            ViewKind::LazyColumn { .. } => "LazyColumn",
            ViewKind::Spacer => "Spacer",
            ViewKind::Text { .. } => "Text",
            ViewKind::ClickableText { .. } => "ClickableText",
            ViewKind::Image { .. } => "Image",
            ViewKind::Icon { .. } => "Icon",
            ViewKind::Button { .. } => "Button",
            ViewKind::TextField { .. } => "TextField",
            ViewKind::Checkbox { .. } => "Checkbox",
            ViewKind::Divider { .. } => "Divider",
            ViewKind::BottomNavigation { .. } => "BottomNavigation",
            ViewKind::BottomNavigationItem { .. } => "BottomNavigationItem",
        }
    }
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface { color } => {
                f.debug_struct("Surface").field("color", color).finish()
            }
            ViewKind::Row { arrangement }
            | ViewKind::Column { arrangement }
            | ViewKind::LazyRow { arrangement }
            | ViewKind::LazyColumn { arrangement } => f
                .debug_struct(self.name())
                .field("arrangement", arrangement)
                .finish(),
            ViewKind::Box | ViewKind::Spacer => f.write_str(self.name()),
            ViewKind::Text { text, color, style } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("style", style)
                .finish(),
            ViewKind::ClickableText { text, .. } => f
                .debug_struct("ClickableText")
                .field("text", &text.text())
                .field("annotations", &text.annotations().len())
                .finish(),
            ViewKind::Image {
                source,
                description,
                fit,
            } => f
                .debug_struct("Image")
                .field("source", source)
                .field("description", description)
                .field("fit", fit)
                .finish(),
            ViewKind::Icon {
                icon, description, ..
            } => f
                .debug_struct("Icon")
                .field("icon", icon)
                .field("description", description)
                .finish(),
            ViewKind::Button {
                style, on_click, ..
            } => f
                .debug_struct("Button")
                .field("style", style)
                .field("on_click", &on_click.as_ref().map(|_| "<callback>"))
                .finish(),
            ViewKind::TextField {
                value,
                label,
                keyboard,
                ..
            } => f
                .debug_struct("TextField")
                .field("value", value)
                .field("label", label)
                .field("keyboard", keyboard)
                .finish(),
            ViewKind::Checkbox { checked, .. } => f
                .debug_struct("Checkbox")
                .field("checked", checked)
                .finish(),
            ViewKind::Divider { thickness, .. } => f
                .debug_struct("Divider")
                .field("thickness", thickness)
                .finish(),
            ViewKind::BottomNavigation { .. } => f.write_str("BottomNavigation"),
            ViewKind::BottomNavigationItem {
                selected, label, ..
            } => f
                .debug_struct("BottomNavigationItem")
                .field("selected", selected)
                .field("label", label)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Depth-first, pre-order walk over this view and its descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View, usize)) {
        fn go<'a>(v: &'a View, depth: usize, f: &mut impl FnMut(&'a View, usize)) {
            f(v, depth);
            for c in &v.children {
                go(c, depth + 1, f);
            }
        }
        go(self, 0, f)
    }

    /// Number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        let mut n = 0;
        self.walk(&mut |_, _| n += 1);
        n
    }

    /// Assigns ids in pre-order, starting at 1.
    pub fn stamp_ids(mut self) -> View {
        fn stamp(v: &mut View, id: &mut ViewId) {
            v.id = *id;
            *id += 1;
            for c in &mut v.children {
                stamp(c, id);
            }
        }
        let mut id = 1;
        stamp(&mut self, &mut id);
        self
    }
}
