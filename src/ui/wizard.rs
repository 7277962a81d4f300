use crate::engine::{self, Confidence, SortColumn};
use crate::extract::{mime_type, MATERIAL_OPTIONS};
use crate::model::{Field, IfcEntity, Status};
use crate::ui::app::App;
use crate::workflow::Step;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table},
    Frame,
};

// Brandbook colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68);
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);
const BRAND_RED: Color = Color::Rgb(0x9E, 0x3C, 0x3C);

const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const MISSING_STYLE: Style = Style::new().fg(BRAND_RED);

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(1), // Step indicator
        Constraint::Min(10),   // Step content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_step_indicator(frame, chunks[1], app);

    match app.workflow.step() {
        Step::Upload => draw_upload(frame, chunks[2], app),
        Step::Preview => draw_preview(frame, chunks[2], app),
        Step::Suggest => draw_mapping(frame, chunks[2], app),
        Step::Fill => draw_fill(frame, chunks[2], app),
        Step::Review => draw_review(frame, chunks[2], app),
    }

    draw_footer(frame, chunks[3], footer_hint(app.workflow.step()));
}

fn footer_hint(step: Step) -> &'static str {
    match step {
        Step::Upload => " Enter Process Files | q Quit ",
        Step::Preview => " 1-5 Sort Column | ↑↓ Scroll | Enter Continue | q Quit ",
        Step::Suggest => " ↑↓ Item | ←→ Change Entity | Enter Continue | q Quit ",
        Step::Fill => " ↑↓ Item | Tab Field | Type/←→ Value | Enter Set | c Continue | q Quit ",
        Step::Review => " e Export CSV | x Export JSON | r Start New Mapping | q Quit ",
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.workflow.step();
    let title = format!(
        " IFC Mapper | Step {} of {} | {} ",
        step.index(),
        Step::COUNT,
        step.title()
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_step_indicator(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.workflow.step().index();
    let mut spans = vec![Span::raw(" ")];

    for step in Step::ALL {
        let index = step.index();
        let (marker, style) = if index < current {
            ("✓".to_string(), Style::default().fg(BRAND_GREEN))
        } else if index == current {
            (index.to_string(), Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD))
        } else {
            (index.to_string(), Style::default().fg(BRAND_MUTED))
        };

        spans.push(Span::styled(format!("[{marker}] {}", step.title()), style));
        if index < Step::COUNT {
            spans.push(Span::styled("  ▸  ", Style::default().fg(BRAND_MUTED)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, hint: &str) {
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn draw_upload(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Upload Non-BIM Data Files",
            HEADER_STYLE,
        )),
        Line::from("Excel, CSV, Word and text files are supported."),
        Line::from(""),
    ];

    if app.selected_files.is_empty() {
        lines.push(Line::from(Span::styled(
            "No files selected - pass file paths on the command line.",
            Style::default().fg(BRAND_MUTED),
        )));
    } else {
        lines.push(Line::from(format!(
            "{} file(s) selected:",
            app.selected_files.len()
        )));
        for file in &app.selected_files {
            let (mime, style) = match mime_type(file) {
                Some(mime) => (mime, Style::default().fg(BRAND_GREEN)),
                None => ("unsupported", MISSING_STYLE),
            };
            lines.push(Line::from(vec![
                Span::raw(format!("  {} ", file.display())),
                Span::styled(format!("({mime})"), style),
            ]));
        }
    }

    if let Some(error) = &app.upload_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(error.clone(), MISSING_STYLE)));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" File Upload ")
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

fn sort_title(app: &App, column: SortColumn, key: char) -> String {
    let indicator = if app.sort.column == Some(column) {
        app.sort.direction.indicator()
    } else {
        ""
    };
    format!("[{key}] {}{indicator}", column.title())
}

fn draw_preview(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec![
        Cell::from(sort_title(app, SortColumn::Id, '1')),
        Cell::from(sort_title(app, SortColumn::Name, '2')),
        Cell::from(sort_title(app, SortColumn::Type, '3')),
        Cell::from(sort_title(app, SortColumn::Level, '4')),
        Cell::from("Dimensions"),
        Cell::from(sort_title(app, SortColumn::Material, '5')),
    ])
    .style(HEADER_STYLE);

    let sorted = app.sorted_records();
    let rows: Vec<Row> = sorted
        .iter()
        .skip(app.preview_scroll)
        .map(|record| {
            let dimensions = match record.dimensions {
                Some(d) => Cell::from(format!(
                    "W: {}m, H: {}m, D: {}m",
                    d.width, d.height, d.depth
                )),
                None => Cell::from("Missing").style(MISSING_STYLE),
            };
            let material = match record.material.as_deref() {
                Some(material) => Cell::from(material.to_string()),
                None => Cell::from("Missing").style(MISSING_STYLE),
            };

            Row::new(vec![
                Cell::from(record.id.clone()),
                Cell::from(record.name.clone()),
                Cell::from(record.raw_type.clone()),
                Cell::from(record.level.to_string()),
                dimensions,
                material,
            ])
        })
        .collect();

    let title = format!(
        " Data Preview | {} objects extracted from {} file(s) ",
        app.workflow.records().len(),
        app.workflow.files().len()
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Min(26),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(table, area);
}

fn confidence_cell(confidence: Confidence) -> Cell<'static> {
    let color = match confidence {
        Confidence::High => BRAND_GREEN,
        Confidence::Medium => BRAND_ORANGE,
        Confidence::Low => BRAND_MUTED,
    };
    Cell::from(confidence.label()).style(Style::default().fg(color))
}

fn draw_mapping(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["Item", "Type", "IFC Entity", "Confidence"]).style(HEADER_STYLE);

    let rows: Vec<Row> = app
        .workflow
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let entity = app
                .working_mappings
                .get(&record.id)
                .copied()
                .unwrap_or(IfcEntity::BuildingElement);
            let confidence = engine::confidence(record, entity);

            let row = Row::new(vec![
                Cell::from(record.name.clone()),
                Cell::from(record.raw_type.clone()),
                Cell::from(format!("◂ {entity} ▸")),
                confidence_cell(confidence),
            ]);

            if i == app.mapping_selected {
                row.style(SELECTED_STYLE)
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(26),
            Constraint::Min(18),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Mapping Suggestions | review and adjust the suggested IFC entities ")
            .borders(Borders::ALL),
    );

    frame.render_widget(table, area);
}

fn draw_fill(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Progress
        Constraint::Min(8),    // Items + editor
    ])
    .split(area);

    let progress = app.workflow.fill_progress();
    let completed = app
        .fill_items
        .iter()
        .filter(|id| !app.workflow.missing().contains_key(*id))
        .count();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Missing Data | {} field(s) across {} item(s) | {completed} of {} items completed ",
            app.workflow.total_missing_fields(),
            app.workflow.missing().len(),
            app.fill_items.len(),
        )))
        .gauge_style(Style::default().fg(BRAND_GREEN))
        .ratio(progress / 100.0);
    frame.render_widget(gauge, chunks[0]);

    let panels = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    draw_fill_items(frame, panels[0], app);
    draw_fill_editor(frame, panels[1], app);
}

fn draw_fill_items(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .fill_items
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let record = app.workflow.records().iter().find(|r| &r.id == id);
            let label = record.map_or_else(
                || id.clone(),
                |r| format!("{} ({})", r.name, r.raw_type),
            );

            let remaining = app.workflow.missing().get(id).map_or(0, Vec::len);
            let (tag, tag_style) = if remaining == 0 {
                ("Complete".to_string(), Style::default().fg(BRAND_GREEN))
            } else {
                (format!("{remaining} missing"), MISSING_STYLE)
            };

            let style = if i == app.fill_selected {
                SELECTED_STYLE
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(label, style),
                Span::raw(" "),
                Span::styled(tag, tag_style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Items with Missing Data ")
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn draw_fill_editor(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();

    if app.fill_items.is_empty() {
        lines.push(Line::from(Span::styled(
            "All data fields are complete.",
            Style::default().fg(BRAND_GREEN),
        )));
        lines.push(Line::from("Press c to continue to review."));
    } else if let Some(record) = app.current_fill_record() {
        lines.push(Line::from(Span::styled(
            format!("{} ({})", record.name, record.raw_type),
            HEADER_STYLE,
        )));
        lines.push(Line::from(""));

        let fields = app.current_fields();
        if fields.is_empty() {
            lines.push(Line::from(Span::styled(
                "Complete - nothing left to fill for this item.",
                Style::default().fg(BRAND_GREEN),
            )));
        }

        for (i, field) in fields.iter().enumerate() {
            let active = i == app.field_index;
            let marker = if active { "▸ " } else { "  " };

            let value = if *field == Field::Material {
                format!("◂ {} ▸", MATERIAL_OPTIONS[app.material_index])
            } else if active {
                format!("{}_", app.input)
            } else {
                String::new()
            };

            let unit = if field.is_dimensional() { " (m)" } else { "" };
            let style = if active { SELECTED_STYLE } else { Style::default() };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{field}{unit}: "), style),
                Span::raw(value),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Fill Missing Fields ")
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

fn draw_review(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Summary counts
        Constraint::Length(3), // Completion gauge
        Constraint::Min(6),    // Table + preview panel
        Constraint::Length(1), // Status message
    ])
    .split(area);

    let summary = format!(
        " Total: {} | Ready: {} | Incomplete: {} ",
        app.workflow.processed().len(),
        app.workflow.ready_count(),
        app.workflow.incomplete_count()
    );
    frame.render_widget(
        Paragraph::new(summary)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let completion = app.workflow.completion_percentage();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Data Completion "),
        )
        .gauge_style(Style::default().fg(if completion >= 100.0 {
            BRAND_GREEN
        } else {
            BRAND_ORANGE
        }))
        .ratio(completion / 100.0);
    frame.render_widget(gauge, chunks[1]);

    let panels = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    draw_review_table(frame, panels[0], app);
    draw_preview_panel(frame, panels[1], app);

    if let Some(message) = &app.status_message {
        frame.render_widget(
            Paragraph::new(format!(" {message}")).style(Style::default().fg(BRAND_GREEN)),
            chunks[3],
        );
    }
}

fn draw_review_table(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["Name", "Type", "IFC Entity", "Status"]).style(HEADER_STYLE);

    let rows: Vec<Row> = app
        .workflow
        .processed()
        .iter()
        .map(|processed| {
            let status_style = match processed.status {
                Status::Ready => Style::default().fg(BRAND_GREEN),
                Status::Incomplete => Style::default().fg(BRAND_ORANGE),
            };
            Row::new(vec![
                Cell::from(processed.record.name.clone()),
                Cell::from(processed.record.raw_type.clone()),
                Cell::from(processed.ifc_type.label()),
                Cell::from(processed.status.label()).style(status_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(22),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Processed Records ")
            .borders(Borders::ALL),
    );

    frame.render_widget(table, area);
}

/// The simulated 3D preview. Loads for a fixed delay, then reports the
/// object count; a panel too small to render degrades to a static error
/// placeholder without touching the record set.
fn draw_preview_panel(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title(" IFC Preview ").borders(Borders::ALL);

    if area.width < 24 || area.height < 5 {
        let error = Paragraph::new("Preview unavailable")
            .style(MISSING_STYLE)
            .block(block);
        frame.render_widget(error, area);
        return;
    }

    let progress = app.preview_progress();
    if progress < 1.0 {
        let gauge = Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(BRAND_ORANGE))
            .label(format!("Loading 3D preview… {:.0}%", progress * 100.0))
            .ratio(progress);
        frame.render_widget(gauge, area);
        return;
    }

    let lines = vec![
        Line::from(Span::styled("▣ 3D preview ready", HEADER_STYLE)),
        Line::from(format!(
            "{} objects detected",
            app.workflow.processed().len()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "A full viewer would allow interactive",
            Style::default().fg(BRAND_MUTED),
        )),
        Line::from(Span::styled(
            "exploration of the mapped elements.",
            Style::default().fg(BRAND_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
