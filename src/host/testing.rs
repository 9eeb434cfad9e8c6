// Dobles de prueba de las costuras del navegador

use std::cell::{Cell, RefCell};

use crate::host::{PageHost, Scheduler, SyncButton};
use crate::models::AlertKind;

struct Pending {
    due: u32,
    seq: u64,
    action: Box<dyn FnOnce()>,
}

/// Scheduler con reloj virtual: las acciones solo corren con `advance`
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u32>,
    seq: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
    delays: RefCell<Vec<u32>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u32 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Retardos pedidos, en orden de llamada
    pub fn scheduled_delays(&self) -> Vec<u32> {
        self.delays.borrow().clone()
    }

    /// Avanzar el reloj ejecutando lo que venza, incluidas acciones
    /// programadas por otras acciones dentro de la ventana
    pub fn advance(&self, ms: u32) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let index = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                index.map(|i| queue.remove(i))
            };
            let Some(pending) = next else { break };
            self.now.set(pending.due);
            (pending.action)();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, action: Box<dyn FnOnce()>) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.delays.borrow_mut().push(delay_ms);
        self.queue.borrow_mut().push(Pending {
            due: self.now.get() + delay_ms,
            seq,
            action,
        });
    }
}

/// Página que registra todo lo que el widget le pide
#[derive(Default)]
pub struct RecordingPage {
    pub confirm_answer: Cell<bool>,
    pub confirms: Cell<usize>,
    pub reloads: Cell<usize>,
    pub alerts: RefCell<Vec<(AlertKind, String, bool)>>,
    pub csrf: Option<String>,
    pub status: Option<String>,
}

impl RecordingPage {
    pub fn accepting() -> Self {
        Self {
            confirm_answer: Cell::new(true),
            csrf: Some("tok123".to_string()),
            ..Self::default()
        }
    }

    pub fn alerts(&self) -> Vec<(AlertKind, String, bool)> {
        self.alerts.borrow().clone()
    }
}

impl PageHost for RecordingPage {
    fn confirm(&self, _message: &str) -> bool {
        self.confirms.set(self.confirms.get() + 1);
        self.confirm_answer.get()
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn show_alert(&self, kind: AlertKind, message: &str, allow_markup: bool) {
        self.alerts
            .borrow_mut()
            .push((kind, message.to_string(), allow_markup));
    }

    fn csrf_token(&self) -> Option<String> {
        self.csrf.clone()
    }

    fn sync_status(&self) -> Option<String> {
        self.status.clone()
    }
}

/// Botón en memoria
pub struct RecordingButton {
    pub text: RefCell<String>,
    pub disabled: Cell<bool>,
    pub mutations: Cell<usize>,
    pub fail_loading: bool,
}

impl RecordingButton {
    pub fn new(label: &str) -> Self {
        Self {
            text: RefCell::new(label.to_string()),
            disabled: Cell::new(false),
            mutations: Cell::new(0),
            fail_loading: false,
        }
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl SyncButton for RecordingButton {
    fn label(&self) -> String {
        self.text()
    }

    fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    fn show_loading(&self) -> Result<(), String> {
        if self.fail_loading {
            return Err("spinner unavailable".to_string());
        }
        self.mutations.set(self.mutations.get() + 1);
        self.disabled.set(true);
        *self.text.borrow_mut() = "Syncing...".to_string();
        Ok(())
    }

    fn restore(&self, label: &str) {
        self.mutations.set(self.mutations.get() + 1);
        self.disabled.set(false);
        *self.text.borrow_mut() = label.to_string();
    }
}
