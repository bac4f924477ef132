// SPDX-License-Identifier: MPL-2.0
//! Image-grid overview screen.
//!
//! Shows every page of the sequence as a grid with an adjustable column
//! count; clicking a cell jumps the viewer to the spread containing that
//! image.

use crate::config::{MAX_GRID_COLUMNS, MIN_GRID_COLUMNS};
use crate::i18n::fluent::I18n;
use crate::page_sequence::PageSequence;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, scrollable, slider, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};
use std::path::Path;

/// Contextual data needed to render the overview.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub sequence: &'a PageSequence,
    pub columns: u16,
    pub show_filenames: bool,
}

/// Messages emitted by the overview.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    ColumnsChanged(u16),
    PagePicked(usize),
}

/// Render the overview screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let top_bar = build_top_bar(&ctx);
    let grid = build_grid(&ctx);

    Column::new()
        .push(top_bar)
        .push(scrollable(grid).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("overview-title")).size(typography::TITLE_MD);

    let columns_label = Text::new(ctx.i18n.tr("overview-columns")).size(typography::CAPTION);
    let columns_slider = slider(
        MIN_GRID_COLUMNS..=MAX_GRID_COLUMNS,
        ctx.columns,
        Message::ColumnsChanged,
    )
    .width(Length::Fixed(sizing::COLUMN_SLIDER_WIDTH));

    let close_button = button(Text::new(ctx.i18n.tr("overview-close")))
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(styles::button_primary);

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .align_y(Vertical::Center)
            .push(title)
            .push(Space::new().width(Length::Fill))
            .push(columns_label)
            .push(columns_slider)
            .push(close_button),
    )
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn build_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = usize::from(ctx.columns.max(1));
    let mut grid = Column::new().spacing(spacing::XS).padding(spacing::XS);

    let pages: Vec<&Path> = ctx.sequence.iter().collect();
    for (row_index, chunk) in pages.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::XS);

        for (cell_index, path) in chunk.iter().enumerate() {
            let raw_index = row_index * columns + cell_index;
            row = row.push(grid_cell(path, raw_index, ctx.show_filenames));
        }

        // Pad the final row so cells keep their column width.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }

        grid = grid.push(row);
    }

    grid.width(Length::Fill).into()
}

fn grid_cell(path: &Path, raw_index: usize, show_filenames: bool) -> Element<'_, Message> {
    let thumbnail = Image::new(Handle::from_path(path))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::OVERVIEW_CELL_HEIGHT));

    let caption = if show_filenames {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        format!("{}", raw_index + 1)
    };

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(thumbnail)
        .push(Text::new(caption).size(typography::CAPTION));

    button(content)
        .on_press(Message::PagePicked(raw_index))
        .padding(spacing::XXS)
        .style(styles::button::grid_cell)
        .width(Length::FillPortion(1))
        .into()
}
