//! Home section: search, theme cards and the plant list.

use std::cell::RefCell;
use std::rc::Rc;

use bloom_core::*;
use bloom_data::{Plant, Selection, Theme};
use bloom_ui::*;

use crate::strings;

/// Event sinks of the home screen. All default to no-ops.
#[derive(Clone)]
pub struct HomeCallbacks {
    pub on_search: Rc<dyn Fn(String)>,
    pub on_theme_selected: Rc<dyn Fn(&Theme)>,
    pub on_filter_requested: Rc<dyn Fn()>,
    pub on_plant_toggled: Rc<dyn Fn(&Plant, bool)>,
}

impl Default for HomeCallbacks {
    fn default() -> Self {
        Self {
            on_search: Rc::new(|_: String| {}),
            on_theme_selected: Rc::new(|_: &Theme| {}),
            on_filter_requested: Rc::new(|| {}),
            on_plant_toggled: Rc::new(|_: &Plant, _: bool| {}),
        }
    }
}

/// `query` holds the search text between compositions.
pub fn Home(
    modifier: Modifier,
    query: Rc<RefCell<String>>,
    themes: &[Theme],
    plants: &[Plant],
    selected: &Selection,
    callbacks: &HomeCallbacks,
) -> View {
    let search = {
        let edit = query.clone();
        let on_search = callbacks.on_search.clone();
        OutlinedTextField(
            query.borrow().clone(),
            strings::HOME_SEARCH,
            Modifier::new()
                .padding_top(40.0)
                .padding_horizontal(16.0)
                .fill_max_width(),
            move |s| *edit.borrow_mut() = s,
        )
        .leading_icon(IconKind::Search)
        .on_submit(move |q| on_search(q))
    };

    let plants_header = {
        let on_filter = callbacks.on_filter_requested.clone();
        Row(Modifier::new()
            .padding_top(16.0)
            .height(32.0)
            .padding_horizontal(16.0))
        .child((
            Text(strings::HOME_PLANTS)
                .style(typography().h1)
                .color(colors().on_background)
                .modifier(
                    Modifier::new()
                        .weight(1.0)
                        .padding_from_baseline(24.0, 8.0),
                ),
            IconButton(
                Modifier::new().padding_top(6.0).size_dp(24.0),
                move || on_filter(),
                Icon(
                    IconKind::FilterList,
                    Some(strings::HOME_FILTER_PLANTS.to_string()),
                )
                .modifier(Modifier::new().fill_max_size()),
            ),
        ))
    };

    Surface(
        Modifier::new(),
        colors().background,
        Column(modifier.fill_max_size()).child((
            search,
            Text(strings::HOME_THEMES)
                .style(typography().h1)
                .color(colors().on_background)
                .modifier(
                    Modifier::new()
                        .padding_from_baseline(32.0, 16.0)
                        .padding_horizontal(16.0),
                ),
            ThemeCardRow(
                Modifier::new().fill_max_width(),
                themes,
                callbacks.on_theme_selected.clone(),
            ),
            plants_header,
            PlantList(
                Modifier::new()
                    .padding_top(8.0)
                    .padding_horizontal(16.0)
                    .fill_max_width(),
                plants,
                selected,
                callbacks.on_plant_toggled.clone(),
            ),
        )),
    )
}

pub fn ThemeCardRow(
    modifier: Modifier,
    themes: &[Theme],
    on_theme_selected: Rc<dyn Fn(&Theme)>,
) -> View {
    LazyRow(
        themes,
        modifier,
        PaddingValues::horizontal(16.0),
        8.0,
        |theme| {
            let on_click = on_theme_selected.clone();
            let clicked = theme.clone();
            ThemeCard(theme, Modifier::new(), move || on_click(&clicked))
        },
    )
}

pub fn ThemeCard(theme: &Theme, modifier: Modifier, on_click: impl Fn() + 'static) -> View {
    Card(
        modifier
            .size_dp(136.0)
            .clickable(on_click)
            .test_tag(format!("theme-{}", theme.id)),
        1.0,
        Column(
            Modifier::new()
                .fill_max_size()
                .background(colors().surface),
        )
        .child((
            Image(
                Modifier::new().fill_max_width().height(96.0),
                ImageSource::url(&theme.image_url),
            )
            .image_fit(ImageFit::Crop)
            .content_description(&theme.image_description),
            Text(&theme.name)
                .style(typography().h2)
                .color(colors().on_background)
                .modifier(
                    Modifier::new()
                        .padding_from_baseline(24.0, 16.0)
                        .padding_horizontal(16.0),
                ),
        )),
    )
}

pub fn PlantList(
    modifier: Modifier,
    plants: &[Plant],
    selected: &Selection,
    on_plant_toggled: Rc<dyn Fn(&Plant, bool)>,
) -> View {
    LazyColumn(
        plants,
        modifier,
        PaddingValues {
            bottom: 16.0,
            ..Default::default()
        },
        8.0,
        |plant| {
            let on_toggle = on_plant_toggled.clone();
            let toggled = plant.clone();
            PlantRow(
                plant,
                Modifier::new(),
                selected.contains(plant),
                move |checked| on_toggle(&toggled, checked),
            )
        },
    )
}

pub fn PlantRow(
    plant: &Plant,
    modifier: Modifier,
    checked: bool,
    on_checked_change: impl Fn(bool) + 'static,
) -> View {
    Row(modifier
        .fill_max_width()
        .height(64.0)
        .test_tag(format!("plant-{}", plant.id)))
    .child((
        Image(
            Modifier::new()
                .size_dp(64.0)
                .clip_rounded(shapes().small),
            ImageSource::url(&plant.image_url),
        )
        .image_fit(ImageFit::Crop),
        Column(
            Modifier::new()
                .fill_max_height()
                .padding_start(8.0)
                .weight(1.0),
        )
        .arrangement(Arrangement::SpaceBetween)
        .child((
            Row(Modifier::new().padding_start(8.0).fill_max_width())
                .arrangement(Arrangement::SpaceBetween)
                .child((
                    Column(Modifier::new()).child((
                        Text(&plant.name)
                            .style(typography().h2)
                            .color(colors().on_background)
                            .modifier(Modifier::new().padding_from_baseline(24.0, 0.0)),
                        Text(&plant.description)
                            .style(typography().body1)
                            .color(colors().on_background)
                            .modifier(Modifier::new().padding_from_baseline(16.0, 0.0)),
                    )),
                    Checkbox(checked, on_checked_change)
                        .modifier(Modifier::new().padding_top(16.0)),
                )),
            Divider(Modifier::new().fill_max_width()),
        )),
    ))
}

#[cfg(test)]
mod tests {
    use bloom_data::{ContentProvider, StaticContent};

    use super::*;

    fn checkbox_states(v: &View) -> Vec<bool> {
        let mut out = Vec::new();
        v.walk(&mut |n, _| {
            if let ViewKind::Checkbox { checked, .. } = n.kind {
                out.push(checked);
            }
        });
        out
    }

    #[test]
    fn only_selected_plants_render_checked() {
        let content = StaticContent::new();
        let plants = content.list_plants();
        let selected = Selection::of(&plants[..1]);
        let list = PlantList(
            Modifier::new(),
            plants,
            &selected,
            Rc::new(|_: &Plant, _: bool| {}),
        );

        let states = checkbox_states(&list);
        assert_eq!(states.len(), plants.len());
        assert!(states[0]);
        assert!(states[1..].iter().all(|c| !c));
    }

    #[test]
    fn theme_cards_keep_catalogue_order() {
        let content = StaticContent::new();
        let row = ThemeCardRow(
            Modifier::new(),
            content.list_themes(),
            Rc::new(|_: &Theme| {}),
        );
        let tags: Vec<_> = row
            .children
            .iter()
            .filter_map(|c| c.modifier.test_tag.clone())
            .collect();
        assert_eq!(tags, ["theme-1", "theme-2", "theme-3", "theme-4", "theme-5"]);
        assert!(matches!(
            row.kind,
            ViewKind::LazyRow {
                arrangement: Arrangement::SpacedBy(_)
            }
        ));
    }
}
