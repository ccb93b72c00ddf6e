use crate::entities::Layout;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

/// Draws a single bin with its placed items (and optionally its free rectangles).
pub fn layout_to_svg(layout: &Layout, options: SvgDrawOptions, title: &str) -> Document {
    let bin = &layout.bin;
    let (width, height) = (bin.width as f32, bin.height as f32);
    let margin = 0.05 * f32::max(width, height);

    let theme = &options.theme;

    let stroke_width = f32::min(width, height) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the bin
        let label_content = format!(
            "bin: {} | width: {} | height: {} | cost: {} | density: {:.3}% | {}",
            bin.id + 1,
            bin.width,
            bin.height,
            bin.cost,
            layout.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * 0.025 * f32::min(width, height))
            .set("font-size", f32::min(width, height) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw bin
    let bin_group = Group::new()
        .set("id", format!("bin_{}", bin.id + 1))
        .add(svg_util::data_to_path(
            svg_util::rect_data(bin.rect(), bin.height),
            &[
                ("fill", &*format!("{}", theme.bin_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "bin, id: {}, {}x{}, cost: {}",
            bin.id + 1,
            bin.width,
            bin.height,
            bin.cost
        )));

    //draw items
    let items_group = {
        let stroke_color = svg_util::change_brightness(theme.item_fill, 0.5);
        let mut items_group = Group::new().set("id", "items");
        for pi in layout.placed_items.iter() {
            let mut item_group = Group::new()
                .set("id", format!("item_{}", pi.item_id + 1))
                .add(svg_util::data_to_path(
                    svg_util::rect_data(pi.rect, bin.height),
                    &[
                        ("fill", &*format!("{}", theme.item_fill)),
                        ("stroke-width", &*format!("{}", stroke_width)),
                        ("stroke", &*format!("{}", stroke_color)),
                    ],
                ))
                .add(Title::new(format!(
                    "item, id: {}, rect: {}, rotated: {}",
                    pi.item_id + 1,
                    pi.rect,
                    pi.rotated
                )));
            if options.label_items {
                let font_size = 0.4 * f32::min(pi.rect.width() as f32, pi.rect.height() as f32);
                let (cx, cy) = (
                    (pi.rect.x_min + pi.rect.x_max) as f32 / 2.0,
                    height - (pi.rect.y_min + pi.rect.y_max) as f32 / 2.0,
                );
                item_group = item_group.add(
                    Text::new(format!("{}", pi.item_id + 1))
                        .set("x", cx)
                        .set("y", cy)
                        .set("font-size", font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            items_group = items_group.add(item_group);
        }
        items_group
    };

    let free_rects_group = match options.draw_free_rects {
        false => None,
        true => {
            let mut group = Group::new().set("id", "free_rects");
            for rect in layout.free_rects.iter() {
                group = group.add(svg_util::data_to_path(
                    svg_util::rect_data(*rect, bin.height),
                    &[
                        ("fill", "none"),
                        ("stroke", &*format!("{}", theme.free_rect_stroke)),
                        ("stroke-width", &*format!("{}", stroke_width)),
                        ("stroke-opacity", "0.8"),
                        ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                        ("stroke-linecap", "round"),
                        ("stroke-linejoin", "round"),
                    ],
                ));
            }
            Some(group)
        }
    };

    let vbox = (-margin, -2.0 * margin, width + 2.0 * margin, height + 3.0 * margin);

    let document = Document::new()
        .set("viewBox", vbox)
        .add(bin_group)
        .add(items_group)
        .add(label);

    match free_rects_group {
        Some(group) => document.add(group),
        None => document,
    }
}
