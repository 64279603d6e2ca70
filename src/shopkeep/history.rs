//! Order history and low-stock alerts.
//!
//! Both containers hold product snapshots. The interactive flow only ever
//! pushes onto them; the drain operations are kept for a surrounding system
//! (an audit viewer, an alerting service) to consume independently.

use std::collections::VecDeque;

use crate::model::Product;

/// Last-in-first-out record of completed orders.
#[derive(Debug, Default)]
pub struct OrderHistory {
    orders: Vec<Product>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, snapshot: Product) {
        self.orders.push(snapshot);
    }

    pub fn pop_most_recent(&mut self) -> Option<Product> {
        self.orders.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }
}

/// First-in-first-out queue of products flagged as low stock.
#[derive(Debug, Default)]
pub struct LowStockAlerts {
    flagged: VecDeque<Product>,
}

impl LowStockAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(&mut self, snapshot: Product) {
        self.flagged.push_back(snapshot);
    }

    pub fn dequeue_next(&mut self) -> Option<Product> {
        self.flagged.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.flagged.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flagged.len()
    }
}
