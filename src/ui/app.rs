use crate::engine::{SortColumn, SortState};
use crate::extract::MATERIAL_OPTIONS;
use crate::model::{Field, IfcEntity, MappingTable, Record};
use crate::workflow::{Step, Workflow};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long the simulated 3D preview "loads" before becoming interactive.
/// Fire-and-forget: there is no cancellation and no retry.
pub const PREVIEW_LOAD: Duration = Duration::from_millis(1500);

const TICK: Duration = Duration::from_millis(250);

pub struct App {
    pub workflow: Workflow,
    /// Files passed on the command line, offered for processing in step 1.
    pub selected_files: Vec<PathBuf>,
    pub upload_error: Option<String>,
    /// Sort toggle for the preview table.
    pub sort: SortState,
    pub preview_scroll: usize,
    /// Working copy of the mapping table, committed on continue.
    pub working_mappings: MappingTable,
    pub mapping_selected: usize,
    /// Ids that had missing fields when the fill step was entered; kept so
    /// completed items stay listed with a "Complete" tag.
    pub fill_items: Vec<String>,
    pub fill_selected: usize,
    pub field_index: usize,
    /// Text buffer for dimension input (digits and a dot only).
    pub input: String,
    pub material_index: usize,
    /// When the review step was entered; gates the simulated preview load.
    pub review_entered: Option<Instant>,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(files: Vec<PathBuf>, seed: Option<u64>) -> Self {
        Self {
            workflow: Workflow::new(seed),
            selected_files: files,
            upload_error: None,
            sort: SortState::default(),
            preview_scroll: 0,
            working_mappings: MappingTable::new(),
            mapping_selected: 0,
            fill_items: Vec::new(),
            fill_selected: 0,
            field_index: 0,
            input: String::new(),
            material_index: 0,
            review_entered: None,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::wizard::draw(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        // Polled with a tick so the simulated preview load animates.
        if !event::poll(TICK)? {
            return Ok(());
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.workflow.step() {
                Step::Upload => self.handle_upload_keys(key.code),
                Step::Preview => self.handle_preview_keys(key.code),
                Step::Suggest => self.handle_mapping_keys(key.code),
                Step::Fill => self.handle_fill_keys(key.code),
                Step::Review => self.handle_review_keys(key.code),
            }
        }
        Ok(())
    }

    fn handle_upload_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.process_files(),
            _ => {}
        }
    }

    fn process_files(&mut self) {
        self.upload_error = None;
        match self.workflow.complete_upload(self.selected_files.clone()) {
            Ok(()) => self.sort = SortState::default(),
            Err(err) => self.upload_error = Some(err.to_string()),
        }
    }

    fn handle_preview_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.sort.toggle(SortColumn::Id),
            KeyCode::Char('2') => self.sort.toggle(SortColumn::Name),
            KeyCode::Char('3') => self.sort.toggle(SortColumn::Type),
            KeyCode::Char('4') => self.sort.toggle(SortColumn::Level),
            KeyCode::Char('5') => self.sort.toggle(SortColumn::Material),
            KeyCode::Up | KeyCode::Char('k') => {
                self.preview_scroll = self.preview_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.workflow.records().len().saturating_sub(1);
                if self.preview_scroll < max {
                    self.preview_scroll += 1;
                }
            }
            KeyCode::Enter => {
                self.workflow.complete_preview();
                self.working_mappings = self.workflow.mappings().clone();
                self.mapping_selected = 0;
            }
            _ => {}
        }
    }

    fn handle_mapping_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.mapping_selected = self.mapping_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.workflow.records().len().saturating_sub(1);
                if self.mapping_selected < max {
                    self.mapping_selected += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.cycle_mapping(-1),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_mapping(1),
            KeyCode::Enter => {
                self.workflow.complete_mapping(self.working_mappings.clone());
                self.enter_fill_step();
            }
            _ => {}
        }
    }

    /// Cycles the selected record's entity through the selectable list.
    /// Overrides stay in the working copy until continue commits them.
    fn cycle_mapping(&mut self, delta: i64) {
        let Some(record) = self.workflow.records().get(self.mapping_selected) else {
            return;
        };
        let current = self
            .working_mappings
            .get(&record.id)
            .copied()
            .unwrap_or(IfcEntity::BuildingElement);

        let options = IfcEntity::SELECTABLE;
        let position = options.iter().position(|e| *e == current).unwrap_or(0) as i64;
        let count = options.len() as i64;
        let next = (position + delta).rem_euclid(count) as usize;
        self.working_mappings.insert(record.id.clone(), options[next]);
    }

    fn enter_fill_step(&mut self) {
        self.fill_items = self.workflow.missing().keys().cloned().collect();
        self.fill_selected = 0;
        self.field_index = 0;
        self.input.clear();
        self.material_index = 0;
    }

    fn handle_fill_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.select_fill_item(-1),
            KeyCode::Down => self.select_fill_item(1),
            KeyCode::Tab => self.next_field(),
            KeyCode::Left => self.cycle_material(-1),
            KeyCode::Right => self.cycle_material(1),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => self.input.push(c),
            KeyCode::Enter => self.commit_field(),
            KeyCode::Char('c') => {
                self.workflow.complete_fill();
                self.review_entered = Some(Instant::now());
            }
            _ => {}
        }
    }

    fn select_fill_item(&mut self, delta: i64) {
        if self.fill_items.is_empty() {
            return;
        }
        let max = self.fill_items.len() as i64 - 1;
        let next = (self.fill_selected as i64 + delta).clamp(0, max) as usize;
        if next != self.fill_selected {
            self.fill_selected = next;
            self.field_index = 0;
            self.input.clear();
            self.material_index = 0;
        }
    }

    fn next_field(&mut self) {
        let count = self.current_fields().len();
        if count > 0 {
            self.field_index = (self.field_index + 1) % count;
            self.input.clear();
        }
    }

    fn cycle_material(&mut self, delta: i64) {
        if self.current_field() != Some(Field::Material) {
            return;
        }
        let count = MATERIAL_OPTIONS.len() as i64;
        self.material_index = (self.material_index as i64 + delta).rem_euclid(count) as usize;
    }

    fn commit_field(&mut self) {
        let Some(field) = self.current_field() else {
            return;
        };
        let Some(id) = self.fill_items.get(self.fill_selected).cloned() else {
            return;
        };

        let value = if field == Field::Material {
            MATERIAL_OPTIONS[self.material_index].to_string()
        } else {
            self.input.clone()
        };
        self.workflow.update_field(&id, field, &value);
        self.input.clear();

        // Keep the cursor on a still-editable field.
        let remaining = self.current_fields().len();
        if remaining > 0 && self.field_index >= remaining {
            self.field_index = remaining - 1;
        }
    }

    /// Editable fields of the currently selected fill item. The combined
    /// dimensions marker expands into its three axes, like the original
    /// per-axis inputs.
    #[must_use]
    pub fn current_fields(&self) -> Vec<Field> {
        let Some(id) = self.fill_items.get(self.fill_selected) else {
            return Vec::new();
        };
        let Some(missing) = self.workflow.missing().get(id) else {
            return Vec::new();
        };

        let wants = |field: Field| {
            missing.contains(&field)
                || (field.is_dimensional() && missing.contains(&Field::Dimensions))
        };

        let mut fields = Vec::new();
        for field in [Field::Width, Field::Height, Field::Depth, Field::Material] {
            if wants(field) {
                fields.push(field);
            }
        }
        fields
    }

    #[must_use]
    pub fn current_field(&self) -> Option<Field> {
        self.current_fields().get(self.field_index).copied()
    }

    #[must_use]
    pub fn current_fill_record(&self) -> Option<&Record> {
        let id = self.fill_items.get(self.fill_selected)?;
        self.workflow.records().iter().find(|r| &r.id == id)
    }

    fn handle_review_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('e') => self.export(ExportFormat::Csv),
            KeyCode::Char('x') => self.export(ExportFormat::Json),
            KeyCode::Char('r') => {
                self.workflow.reset();
                self.reset_ui();
            }
            _ => {}
        }
    }

    fn export(&mut self, format: ExportFormat) {
        let result = match format {
            ExportFormat::Csv => {
                crate::export::export_csv(self.workflow.processed(), "ifc-mapper-export.csv")
                    .map(|()| "Exported to ifc-mapper-export.csv")
            }
            ExportFormat::Json => {
                crate::export::export_json(self.workflow.processed(), "ifc-mapper-export.json")
                    .map(|()| "Exported to ifc-mapper-export.json")
            }
        };
        self.status_message = Some(match result {
            Ok(message) => message.to_string(),
            Err(err) => format!("Export failed: {err}"),
        });
    }

    fn reset_ui(&mut self) {
        self.upload_error = None;
        self.sort = SortState::default();
        self.preview_scroll = 0;
        self.working_mappings.clear();
        self.mapping_selected = 0;
        self.fill_items.clear();
        self.fill_selected = 0;
        self.field_index = 0;
        self.input.clear();
        self.material_index = 0;
        self.review_entered = None;
        self.status_message = None;
    }

    /// Load progress of the simulated 3D preview, 0.0..=1.0.
    #[must_use]
    pub fn preview_progress(&self) -> f64 {
        match self.review_entered {
            None => 0.0,
            Some(entered) => {
                let elapsed = entered.elapsed().as_secs_f64();
                (elapsed / PREVIEW_LOAD.as_secs_f64()).min(1.0)
            }
        }
    }

    /// Records in preview order, honoring the current sort toggle.
    #[must_use]
    pub fn sorted_records(&self) -> Vec<Record> {
        self.sort.sorted(self.workflow.records())
    }
}

enum ExportFormat {
    Csv,
    Json,
}
