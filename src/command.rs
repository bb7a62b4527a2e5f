//! Command Pattern
//!
//! Editor actions become [`UiCommand`] objects. Each command is bound to the
//! application's clipboard and to one receiving [`Editor`]; `execute` reports
//! whether the command changed anything worth recording. The [`Application`]
//! is the invoker and keeps the history.
//!
//! Undo walks the history: it pops the most recent recorded command and
//! restores the text that command saved before it mutated the editor. Undone
//! commands move to a redo stack, which is cleared by any new recorded
//! command. Redo puts back the text the command produced the first time, so
//! clipboard changes in between do not leak into it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::console::Console;

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Editor {
    text: String,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn remove_text(&mut self) {
        self.text.clear();
    }
}

pub type EditorHandle = Rc<RefCell<Editor>>;

/// Text shared by every command of one application.
#[derive(Debug, Default, Clone)]
pub struct Clipboard(Rc<RefCell<String>>);

impl Clipboard {
    pub fn contents(&self) -> String {
        self.0.borrow().clone()
    }

    pub fn set(&self, text: impl Into<String>) {
        *self.0.borrow_mut() = text.into();
    }
}

// ============================================================================
// Commands
// ============================================================================

pub trait UiCommand {
    fn name(&self) -> &'static str;

    /// Runs the command. Returns `true` when it should be recorded in history.
    fn execute(&mut self) -> bool;

    /// Puts the receiver back the way `execute` found it.
    fn undo(&mut self);

    /// Applies the result of the first `execute` again after an undo.
    fn redo(&mut self);
}

/// State every command shares: its bindings, the text saved before the
/// last mutation and the text that mutation left behind.
#[derive(Debug, Clone)]
pub struct CommandContext {
    clipboard: Clipboard,
    editor: EditorHandle,
    backup: String,
    applied: Option<String>,
}

impl CommandContext {
    pub fn new(clipboard: Clipboard, editor: EditorHandle) -> Self {
        Self {
            clipboard,
            editor,
            backup: String::new(),
            applied: None,
        }
    }

    pub fn save_backup(&mut self) {
        self.backup = self.editor.borrow().text().to_string();
    }

    /// Empty until `save_backup` has run.
    pub fn backup(&self) -> &str {
        &self.backup
    }

    pub fn restore_backup(&self) {
        self.editor.borrow_mut().set_text(self.backup.clone());
    }

    /// Remembers the editor text as the outcome of the first execution.
    pub fn save_applied(&mut self) {
        if self.applied.is_none() {
            self.applied = Some(self.editor.borrow().text().to_string());
        }
    }

    /// Backs up the current text, then writes the remembered outcome back.
    pub fn reapply(&mut self) {
        self.save_backup();
        if let Some(text) = &self.applied {
            self.editor.borrow_mut().set_text(text.clone());
        }
    }
}

macro_rules! ui_command {
    ($($command:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone)]
            pub struct $command {
                context: CommandContext,
            }

            impl $command {
                pub fn new(clipboard: Clipboard, editor: EditorHandle) -> Self {
                    Self {
                        context: CommandContext::new(clipboard, editor),
                    }
                }

                pub fn backup(&self) -> &str {
                    self.context.backup()
                }
            }
        )+
    };
}

ui_command!(CopyCommand, CutCommand, PasteCommand);

impl UiCommand for CopyCommand {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn execute(&mut self) -> bool {
        let text = self.context.editor.borrow().text().to_string();
        self.context.clipboard.set(text);
        false
    }

    fn undo(&mut self) {}

    fn redo(&mut self) {}
}

impl UiCommand for CutCommand {
    fn name(&self) -> &'static str {
        "cut"
    }

    fn execute(&mut self) -> bool {
        self.context.save_backup();
        self.context.clipboard.set(self.context.backup.clone());
        self.context.editor.borrow_mut().remove_text();
        self.context.save_applied();
        true
    }

    fn undo(&mut self) {
        self.context.restore_backup();
    }

    fn redo(&mut self) {
        self.context.reapply();
        self.context.clipboard.set(self.context.backup.clone());
    }
}

impl UiCommand for PasteCommand {
    fn name(&self) -> &'static str {
        "paste"
    }

    fn execute(&mut self) -> bool {
        self.context.save_backup();
        let pasted = self.context.clipboard.contents();
        self.context.editor.borrow_mut().set_text(pasted);
        self.context.save_applied();
        true
    }

    fn undo(&mut self) {
        self.context.restore_backup();
    }

    fn redo(&mut self) {
        self.context.reapply();
    }
}

// ============================================================================
// History
// ============================================================================

#[derive(Default)]
pub struct CommandHistory {
    commands: Vec<Box<dyn UiCommand>>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Box<dyn UiCommand>) {
        self.commands.push(command);
    }

    pub fn pop(&mut self) -> Option<Box<dyn UiCommand>> {
        self.commands.pop()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Debug for CommandHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

// ============================================================================
// Invoker
// ============================================================================

#[derive(Debug)]
pub struct Application {
    clipboard: Clipboard,
    editors: Vec<EditorHandle>,
    active: usize,
    history: CommandHistory,
    redo: CommandHistory,
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl Application {
    /// Starts with a single empty editor, which is active.
    pub fn new() -> Self {
        Self {
            clipboard: Clipboard::default(),
            editors: vec![Rc::new(RefCell::new(Editor::new()))],
            active: 0,
            history: CommandHistory::new(),
            redo: CommandHistory::new(),
        }
    }

    /// Opens another editor and returns its index.
    pub fn open_editor(&mut self, editor: Editor) -> usize {
        self.editors.push(Rc::new(RefCell::new(editor)));
        self.editors.len() - 1
    }

    pub fn editor(&self, index: usize) -> Option<EditorHandle> {
        self.editors.get(index).cloned()
    }

    pub fn editor_count(&self) -> usize {
        self.editors.len()
    }

    /// Switches the active editor. Out-of-range indexes leave it unchanged.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index < self.editors.len() {
            self.active = index;
            true
        } else {
            false
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_editor(&self) -> EditorHandle {
        Rc::clone(&self.editors[self.active])
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn execute_command(&mut self, mut command: Box<dyn UiCommand>) -> bool {
        let recorded = command.execute();
        if recorded {
            tracing::debug!(command = command.name(), "command recorded");
            self.history.push(command);
            self.redo.clear();
        }
        recorded
    }

    pub fn copy(&mut self) -> bool {
        let command = CopyCommand::new(self.clipboard.clone(), self.active_editor());
        self.execute_command(Box::new(command))
    }

    pub fn cut(&mut self) -> bool {
        let command = CutCommand::new(self.clipboard.clone(), self.active_editor());
        self.execute_command(Box::new(command))
    }

    pub fn paste(&mut self) -> bool {
        let command = PasteCommand::new(self.clipboard.clone(), self.active_editor());
        self.execute_command(Box::new(command))
    }

    /// Reverts the most recent recorded command. Returns `false` on empty history.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(mut command) => {
                command.undo();
                tracing::debug!(command = command.name(), "command undone");
                self.redo.push(command);
                true
            }
            None => false,
        }
    }

    /// Re-applies the most recently undone command and records it again.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(mut command) => {
                command.redo();
                tracing::debug!(command = command.name(), "command redone");
                self.history.push(command);
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// Demo
// ============================================================================

fn report(app: &Application, editors: &[EditorHandle], out: &mut dyn Console) {
    for (i, editor) in editors.iter().enumerate() {
        out.say(&format!("Editor {} Text: {}", i + 1, editor.borrow().text()));
    }
    out.say(&format!("Application Command History: {:?}", app.history()));
}

pub fn demo(out: &mut dyn Console) {
    let mut app = Application::new();
    if let Some(first) = app.editor(0) {
        first.borrow_mut().set_text("Smart Building Ltd.");
    }
    app.open_editor(Editor::with_text("Smartest Building Ltd."));
    let editors: Vec<EditorHandle> = (0..app.editor_count()).filter_map(|i| app.editor(i)).collect();

    out.say("Copy from editor 1:");
    app.copy();
    report(&app, &editors, out);

    out.say("Paste into editor 2:");
    app.set_active(1);
    app.paste();
    report(&app, &editors, out);

    out.say("Cut from editor 1:");
    app.set_active(0);
    app.cut();
    report(&app, &editors, out);

    out.say("Undo:");
    app.undo();
    report(&app, &editors, out);

    out.say("Redo:");
    app.redo();
    report(&app, &editors, out);
}

// ============================================================================
// Tests
// ============================================================================
