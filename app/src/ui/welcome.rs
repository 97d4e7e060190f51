use bloom_core::*;
use bloom_ui::*;

use crate::strings;

pub fn Welcome(on_create_account: impl Fn() + 'static, on_log_in: impl Fn() + 'static) -> View {
    let log_in_color = {
        let c = colors();
        if c.is_light { c.secondary } else { c.on_primary }
    };

    Surface(
        Modifier::new(),
        colors().primary,
        Box(Modifier::new().fill_max_size()).child((
            Image(
                Modifier::new().fill_max_size(),
                ImageSource::Resource("welcome_bg"),
            )
            .image_fit(ImageFit::FillBounds),
            Column(Modifier::new().fill_max_size()).child((
                Spacer(Modifier::new().height(72.0)),
                Image(
                    Modifier::new()
                        .padding_start(88.0)
                        .align(Alignment::CenterStart),
                    ImageSource::Resource("welcome_illos"),
                )
                .image_fit(ImageFit::Crop),
                Spacer(Modifier::new().height(48.0)),
                Image(
                    Modifier::new().align(Alignment::CenterHorizontally),
                    ImageSource::Resource("logo"),
                )
                .content_description(strings::APP_NAME),
                Text(strings::WELCOME_TAGLINE)
                    .style(typography().subtitle1)
                    .color(colors().on_primary)
                    .modifier(
                        Modifier::new()
                            .align(Alignment::CenterHorizontally)
                            .padding_from_baseline(32.0, 40.0),
                    ),
                Button(
                    Modifier::new()
                        .fill_max_width()
                        .height(48.0)
                        .padding_horizontal(16.0),
                    on_create_account,
                    Text(strings::WELCOME_CREATE_ACCOUNT)
                        .style(typography().button)
                        .color(colors().on_secondary),
                ),
                Spacer(Modifier::new().height(8.0)),
                TextButton(
                    Modifier::new()
                        .fill_max_width()
                        .height(48.0)
                        .padding_horizontal(16.0),
                    on_log_in,
                    Text(strings::WELCOME_LOG_IN)
                        .style(typography().button)
                        .color(log_in_color),
                ),
            )),
        )),
    )
}
