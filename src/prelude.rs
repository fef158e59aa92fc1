//! Weft prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartStore, DELIVERY_SLOT, ITEMS_SLOT, PAYMENT_SLOT},
    delivery::{DeliveryOption, UnknownDeliveryOption},
    items::{LineItem, LineItemId, NewLineItem},
    payment::{
        CheckoutProfile, InstallmentPlan, MAX_INSTALLMENT_AMOUNT, MONTHLY_DEDUCTION, PaymentOption,
    },
    products::{ProductId, ProductSnapshot},
    storage::{MemoryStorage, StorageBackend, StorageError},
};
