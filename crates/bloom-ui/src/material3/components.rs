use std::rc::Rc;

use crate::{Column, Icon, Surface, Text, TextExt, ViewExt};
use bloom_core::*;

/// Rounded, elevated surface.
pub fn Card(modifier: Modifier, elevation: f32, content: View) -> View {
    Surface(
        modifier
            .clip_rounded(shapes().small)
            .elevation(elevation),
        colors().surface,
        content,
    )
}

pub fn Divider(modifier: Modifier) -> View {
    View::new(
        0,
        ViewKind::Divider {
            color: colors().on_surface.with_alpha(31),
            thickness: 1.0,
        },
    )
    .modifier(modifier)
}

pub struct NavItem {
    pub icon: IconKind,
    pub label: String,
    pub selected: bool,
    pub on_click: Rc<dyn Fn()>,
}

/// Bottom navigation bar on the `primary` color.
pub fn BottomNavigation(modifier: Modifier, items: Vec<NavItem>) -> View {
    View::new(
        0,
        ViewKind::BottomNavigation {
            background: colors().primary,
        },
    )
    .modifier(modifier.elevation(16.0))
    .with_children(items.into_iter().map(BottomNavigationItem).collect())
}

fn BottomNavigationItem(item: NavItem) -> View {
    let tint = if item.selected {
        colors().on_primary
    } else {
        colors().on_primary.copy_alpha(0.74)
    };
    let label = item.label.clone();
    View::new(
        0,
        ViewKind::BottomNavigationItem {
            selected: item.selected,
            label: item.label,
            icon: item.icon,
            on_click: Some(item.on_click),
        },
    )
    .modifier(Modifier::new().weight(1.0))
    .child(Column(Modifier::new()).child((
        {
            let mut icon = Icon(item.icon, None);
            if let ViewKind::Icon { tint: t, .. } = &mut icon.kind {
                *t = tint;
            }
            icon
        },
        Text(label).style(typography().caption).color(tint),
    )))
}
