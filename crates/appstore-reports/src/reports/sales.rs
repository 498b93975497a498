use serde::{Deserialize, Serialize};

use crate::scalar::{ReportDate, ReportFloat, ReportInteger};

/// Row of a `SALES`/`SUMMARY` report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesReport {
    /// Service provider, typically Apple.
    #[serde(rename(deserialize = "Provider", serialize = "provider"))]
    pub provider: String,
    #[serde(rename(deserialize = "Provider Country", serialize = "provider_country"))]
    pub provider_country: String,
    /// Product identifier provided during app setup.
    #[serde(rename(deserialize = "SKU", serialize = "sku"))]
    pub sku: String,
    #[serde(rename(deserialize = "Developer", serialize = "developer"))]
    pub developer: String,
    #[serde(rename(deserialize = "Name", serialize = "name"))]
    pub name: String,
    #[serde(rename(deserialize = "Title", serialize = "title"))]
    pub title: String,
    #[serde(rename(deserialize = "Version", serialize = "version"))]
    pub version: String,
    #[serde(rename(deserialize = "Product Type Identifier", serialize = "product_type_identifier"))]
    pub product_type_identifier: String,
    /// Aggregated units; negative values are refunds.
    #[serde(rename(deserialize = "Units", serialize = "units"))]
    pub units: ReportFloat,
    /// Amount received per unit after taxes and commission.
    #[serde(rename(deserialize = "Developer Proceeds", serialize = "developer_proceeds"))]
    pub developer_proceeds: ReportFloat,
    #[serde(rename(deserialize = "Begin Date", serialize = "begin_date"))]
    pub begin_date: ReportDate,
    #[serde(rename(deserialize = "End Date", serialize = "end_date"))]
    pub end_date: ReportDate,
    #[serde(rename(deserialize = "Customer Currency", serialize = "customer_currency"))]
    pub customer_currency: String,
    #[serde(rename(deserialize = "Country Code", serialize = "country_code"))]
    pub country_code: String,
    #[serde(rename(deserialize = "Currency of Proceeds", serialize = "currency_of_proceeds"))]
    pub currency_of_proceeds: String,
    #[serde(rename(deserialize = "Apple Identifier", serialize = "apple_identifier"))]
    pub apple_identifier: ReportInteger,
    #[serde(rename(deserialize = "Customer Price", serialize = "customer_price"))]
    pub customer_price: ReportFloat,
    #[serde(rename(deserialize = "Promo Code", serialize = "promo_code"))]
    pub promo_code: String,
    /// SKU of the parent app for in-app purchases.
    #[serde(rename(deserialize = "Parent Identifier", serialize = "parent_identifier"))]
    pub parent_identifier: String,
    #[serde(rename(deserialize = "Subscription", serialize = "subscription"))]
    pub subscription: String,
    #[serde(rename(deserialize = "Period", serialize = "period"))]
    pub period: String,
    #[serde(rename(deserialize = "Category", serialize = "category"))]
    pub category: String,
    #[serde(rename(deserialize = "CMB", serialize = "cmb"))]
    pub cmb: String,
    #[serde(rename(deserialize = "Device", serialize = "device"))]
    pub device: String,
    #[serde(rename(deserialize = "Supported Platforms", serialize = "supported_platforms"))]
    pub supported_platforms: String,
    #[serde(rename(deserialize = "Proceeds Reason", serialize = "proceeds_reason"))]
    pub proceeds_reason: String,
    #[serde(rename(deserialize = "Preserved Pricing", serialize = "preserved_pricing"))]
    pub preserved_pricing: String,
    #[serde(rename(deserialize = "Client", serialize = "client"))]
    pub client: String,
    #[serde(rename(deserialize = "Order Type", serialize = "order_type"))]
    pub order_type: String,
}

/// Row of a `SUBSCRIPTION`/`SUMMARY` report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionsReport {
    #[serde(rename(deserialize = "App Name", serialize = "app_name"))]
    pub app_name: String,
    #[serde(rename(deserialize = "App Apple ID", serialize = "app_apple_id"))]
    pub app_apple_id: ReportInteger,
    #[serde(rename(deserialize = "Subscription Name", serialize = "subscription_name"))]
    pub subscription_name: String,
    #[serde(rename(deserialize = "Subscription Apple ID", serialize = "subscription_apple_id"))]
    pub subscription_apple_id: ReportInteger,
    #[serde(rename(deserialize = "Subscription Group ID", serialize = "subscription_group_id"))]
    pub subscription_group_id: ReportInteger,
    #[serde(rename(deserialize = "Standard Subscription Duration", serialize = "standard_subscription_duration"))]
    pub standard_subscription_duration: String,
    #[serde(rename(deserialize = "Promotional Offer Name", serialize = "promotional_offer_name"))]
    pub promotional_offer_name: String,
    #[serde(rename(deserialize = "Promotional Offer ID", serialize = "promotional_offer_id"))]
    pub promotional_offer_id: String,
    #[serde(rename(deserialize = "Customer Price", serialize = "customer_price"))]
    pub customer_price: ReportFloat,
    #[serde(rename(deserialize = "Customer Currency", serialize = "customer_currency"))]
    pub customer_currency: String,
    #[serde(rename(deserialize = "Developer Proceeds", serialize = "developer_proceeds"))]
    pub developer_proceeds: ReportFloat,
    #[serde(rename(deserialize = "Proceeds Currency", serialize = "proceeds_currency"))]
    pub proceeds_currency: String,
    #[serde(rename(deserialize = "Preserved Pricing", serialize = "preserved_pricing"))]
    pub preserved_pricing: String,
    #[serde(rename(deserialize = "Proceeds Reason", serialize = "proceeds_reason"))]
    pub proceeds_reason: String,
    #[serde(rename(deserialize = "Client", serialize = "client"))]
    pub client: String,
    #[serde(rename(deserialize = "Device", serialize = "device"))]
    pub device: String,
    #[serde(rename(deserialize = "State", serialize = "state"))]
    pub state: String,
    #[serde(rename(deserialize = "Country", serialize = "country"))]
    pub country: String,
    #[serde(rename(deserialize = "Active Standard Price Subscriptions", serialize = "active_standard_price_subscriptions"))]
    pub active_standard_price_subscriptions: ReportInteger,
    #[serde(rename(deserialize = "Active Free Trial Introductory Offer Subscriptions", serialize = "active_free_trial_introductory_offer_subscriptions"))]
    pub active_free_trial_introductory_offer_subscriptions: ReportInteger,
    #[serde(rename(deserialize = "Active Pay Up Front Introductory Offer Subscriptions", serialize = "active_pay_up_front_introductory_offer_subscriptions"))]
    pub active_pay_up_front_introductory_offer_subscriptions: ReportInteger,
    #[serde(rename(deserialize = "Active Pay As You Go Introductory Offer Subscriptions", serialize = "active_pay_as_you_go_introductory_offer_subscriptions"))]
    pub active_pay_as_you_go_introductory_offer_subscriptions: ReportInteger,
    #[serde(rename(deserialize = "Free Trial Promotional Offer Subscriptions", serialize = "free_trial_promotional_offer_subscriptions"))]
    pub free_trial_promotional_offer_subscriptions: ReportInteger,
    #[serde(rename(deserialize = "Pay Up Front Promotional Offer Subscriptions", serialize = "pay_up_front_promotional_offer_subscriptions"))]
    pub pay_up_front_promotional_offer_subscriptions: ReportInteger,
    #[serde(rename(deserialize = "Pay As You Go Promotional Offer Subscriptions", serialize = "pay_as_you_go_promotional_offer_subscriptions"))]
    pub pay_as_you_go_promotional_offer_subscriptions: ReportInteger,
    #[serde(rename(deserialize = "Marketing Opt-Ins", serialize = "marketing_opt_ins"))]
    pub marketing_opt_ins: ReportInteger,
    #[serde(rename(deserialize = "Billing Retry", serialize = "billing_retry"))]
    pub billing_retry: ReportInteger,
    #[serde(rename(deserialize = "Grace Period", serialize = "grace_period"))]
    pub grace_period: ReportInteger,
    #[serde(rename(deserialize = "Free Trial Offer Code Subscriptions", serialize = "free_trial_offer_code_subscriptions"))]
    pub free_trial_offer_code_subscriptions: ReportInteger,
    #[serde(rename(deserialize = "Pay Up Front Offer Code Subscriptions", serialize = "pay_up_front_offer_code_subscriptions"))]
    pub pay_up_front_offer_code_subscriptions: ReportInteger,
    #[serde(rename(deserialize = "Pay As You Go Offer Code Subscriptions", serialize = "pay_as_you_go_offer_code_subscriptions"))]
    pub pay_as_you_go_offer_code_subscriptions: ReportInteger,
    #[serde(rename(deserialize = "Subscribers", serialize = "subscribers"))]
    pub subscribers: String,
}

/// Row of a `SUBSCRIPTION_EVENT`/`SUMMARY` report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionsEventsReport {
    #[serde(rename(deserialize = "Event Date", serialize = "event_date"))]
    pub event_date: ReportDate,
    /// Event type such as Renew, Cancel or Upgrade.
    #[serde(rename(deserialize = "Event", serialize = "event"))]
    pub event: String,
    #[serde(rename(deserialize = "App Name", serialize = "app_name"))]
    pub app_name: String,
    #[serde(rename(deserialize = "App Apple ID", serialize = "app_apple_id"))]
    pub app_apple_id: ReportInteger,
    #[serde(rename(deserialize = "Subscription Name", serialize = "subscription_name"))]
    pub subscription_name: String,
    #[serde(rename(deserialize = "Subscription Apple ID", serialize = "subscription_apple_id"))]
    pub subscription_apple_id: ReportInteger,
    #[serde(rename(deserialize = "Subscription Group ID", serialize = "subscription_group_id"))]
    pub subscription_group_id: ReportInteger,
    #[serde(rename(deserialize = "Standard Subscription Duration", serialize = "standard_subscription_duration"))]
    pub standard_subscription_duration: String,
    #[serde(rename(deserialize = "Subscription Offer Type", serialize = "subscription_offer_type"))]
    pub subscription_offer_type: String,
    #[serde(rename(deserialize = "Subscription Offer Duration", serialize = "subscription_offer_duration"))]
    pub subscription_offer_duration: String,
    #[serde(rename(deserialize = "Marketing Opt-In", serialize = "marketing_opt_in"))]
    pub marketing_opt_in: String,
    #[serde(rename(deserialize = "Marketing Opt-In Duration", serialize = "marketing_opt_in_duration"))]
    pub marketing_opt_in_duration: String,
    #[serde(rename(deserialize = "Preserved Pricing", serialize = "preserved_pricing"))]
    pub preserved_pricing: String,
    #[serde(rename(deserialize = "Proceeds Reason", serialize = "proceeds_reason"))]
    pub proceeds_reason: String,
    #[serde(rename(deserialize = "Promotional Offer Name", serialize = "promotional_offer_name"))]
    pub promotional_offer_name: String,
    #[serde(rename(deserialize = "Promotional Offer ID", serialize = "promotional_offer_id"))]
    pub promotional_offer_id: String,
    #[serde(rename(deserialize = "Consecutive Paid Periods", serialize = "consecutive_paid_periods"))]
    pub consecutive_paid_periods: ReportInteger,
    #[serde(rename(deserialize = "Original Start Date", serialize = "original_start_date"))]
    pub original_start_date: ReportDate,
    #[serde(rename(deserialize = "Device", serialize = "device"))]
    pub device: String,
    #[serde(rename(deserialize = "Client", serialize = "client"))]
    pub client: String,
    #[serde(rename(deserialize = "State", serialize = "state"))]
    pub state: String,
    #[serde(rename(deserialize = "Country", serialize = "country"))]
    pub country: String,
    #[serde(rename(deserialize = "Previous Subscription Name", serialize = "previous_subscription_name"))]
    pub previous_subscription_name: String,
    #[serde(rename(deserialize = "Previous Subscription Apple ID", serialize = "previous_subscription_apple_id"))]
    pub previous_subscription_apple_id: ReportInteger,
    #[serde(rename(deserialize = "Days Before Canceling", serialize = "days_before_canceling"))]
    pub days_before_canceling: ReportInteger,
    #[serde(rename(deserialize = "Cancellation Reason", serialize = "cancellation_reason"))]
    pub cancellation_reason: String,
    #[serde(rename(deserialize = "Days Canceled", serialize = "days_canceled"))]
    pub days_canceled: ReportInteger,
    /// Number of events sharing these values.
    #[serde(rename(deserialize = "Quantity", serialize = "quantity"))]
    pub quantity: ReportInteger,
}

/// Row of a `SUBSCRIBER`/`DETAILED` report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribersReport {
    #[serde(rename(deserialize = "Event Date", serialize = "event_date"))]
    pub event_date: ReportDate,
    #[serde(rename(deserialize = "App Name", serialize = "app_name"))]
    pub app_name: String,
    #[serde(rename(deserialize = "App Apple ID", serialize = "app_apple_id"))]
    pub app_apple_id: ReportInteger,
    #[serde(rename(deserialize = "Subscription Name", serialize = "subscription_name"))]
    pub subscription_name: String,
    #[serde(rename(deserialize = "Subscription Apple ID", serialize = "subscription_apple_id"))]
    pub subscription_apple_id: ReportInteger,
    #[serde(rename(deserialize = "Subscription Group ID", serialize = "subscription_group_id"))]
    pub subscription_group_id: ReportInteger,
    #[serde(rename(deserialize = "Standard Subscription Duration", serialize = "standard_subscription_duration"))]
    pub standard_subscription_duration: String,
    #[serde(rename(deserialize = "Subscription Offer Name", serialize = "subscription_offer_name"))]
    pub subscription_offer_name: String,
    #[serde(rename(deserialize = "Promotional Offer ID", serialize = "promotional_offer_id"))]
    pub promotional_offer_id: String,
    #[serde(rename(deserialize = "Introductory Price Type", serialize = "introductory_price_type"))]
    pub introductory_price_type: String,
    #[serde(rename(deserialize = "Promotional Offer Name", serialize = "promotional_offer_name"))]
    pub promotional_offer_name: String,
    #[serde(rename(deserialize = "Subscription Offer Duration", serialize = "subscription_offer_duration"))]
    pub subscription_offer_duration: String,
    #[serde(rename(deserialize = "Subscription Offer Type", serialize = "subscription_offer_type"))]
    pub subscription_offer_type: String,
    #[serde(rename(deserialize = "Marketing Opt-In Duration", serialize = "marketing_opt_in_duration"))]
    pub marketing_opt_in_duration: String,
    #[serde(rename(deserialize = "Customer Price", serialize = "customer_price"))]
    pub customer_price: ReportFloat,
    #[serde(rename(deserialize = "Customer Currency", serialize = "customer_currency"))]
    pub customer_currency: String,
    #[serde(rename(deserialize = "Developer Proceeds", serialize = "developer_proceeds"))]
    pub developer_proceeds: ReportFloat,
    #[serde(rename(deserialize = "Proceeds Currency", serialize = "proceeds_currency"))]
    pub proceeds_currency: String,
    #[serde(rename(deserialize = "Preserved Pricing", serialize = "preserved_pricing"))]
    pub preserved_pricing: String,
    #[serde(rename(deserialize = "Proceeds Reason", serialize = "proceeds_reason"))]
    pub proceeds_reason: String,
    #[serde(rename(deserialize = "Client", serialize = "client"))]
    pub client: String,
    #[serde(rename(deserialize = "Country", serialize = "country"))]
    pub country: String,
    /// Randomly generated, stable per subscriber until reset.
    #[serde(rename(deserialize = "Subscriber ID", serialize = "subscriber_id"))]
    pub subscriber_id: ReportInteger,
    #[serde(rename(deserialize = "Subscriber ID Reset", serialize = "subscriber_id_reset"))]
    pub subscriber_id_reset: String,
    #[serde(rename(deserialize = "Refund", serialize = "refund"))]
    pub refund: String,
    /// Original purchase date, set for refunds only.
    #[serde(rename(deserialize = "Purchase Date", serialize = "purchase_date"))]
    pub purchase_date: ReportDate,
    #[serde(rename(deserialize = "Units", serialize = "units"))]
    pub units: ReportInteger,
}

/// Row of a `PRE_ORDER`/`SUMMARY` report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreOrdersReport {
    #[serde(rename(deserialize = "Provider", serialize = "provider"))]
    pub provider: String,
    #[serde(rename(deserialize = "Provider Country", serialize = "provider_country"))]
    pub provider_country: String,
    #[serde(rename(deserialize = "SKU", serialize = "sku"))]
    pub sku: String,
    #[serde(rename(deserialize = "Developer", serialize = "developer"))]
    pub developer: String,
    #[serde(rename(deserialize = "Title", serialize = "title"))]
    pub title: String,
    #[serde(rename(deserialize = "Pre-Order Start Date", serialize = "preorder_start_date"))]
    pub preorder_start_date: ReportDate,
    #[serde(rename(deserialize = "Pre-Order End Date", serialize = "preorder_end_date"))]
    pub preorder_end_date: ReportDate,
    #[serde(rename(deserialize = "Ordered", serialize = "ordered"))]
    pub ordered: ReportFloat,
    #[serde(rename(deserialize = "Canceled", serialize = "canceled"))]
    pub canceled: ReportFloat,
    /// Pre-orders since the start of the pre-order period.
    #[serde(rename(deserialize = "Cumulative Ordered", serialize = "cumulative_ordered"))]
    pub cumulative_ordered: ReportFloat,
    #[serde(rename(deserialize = "Cumulative Canceled", serialize = "cumulative_canceled"))]
    pub cumulative_canceled: ReportFloat,
    #[serde(rename(deserialize = "Start Date", serialize = "start_date"))]
    pub start_date: ReportDate,
    #[serde(rename(deserialize = "End Date", serialize = "end_date"))]
    pub end_date: ReportDate,
    #[serde(rename(deserialize = "Country Code", serialize = "country_code"))]
    pub country_code: String,
    #[serde(rename(deserialize = "Apple Identifier", serialize = "apple_identifier"))]
    pub apple_identifier: ReportInteger,
    #[serde(rename(deserialize = "Device", serialize = "device"))]
    pub device: String,
    #[serde(rename(deserialize = "Supported Platforms", serialize = "supported_platforms"))]
    pub supported_platforms: String,
    #[serde(rename(deserialize = "Category", serialize = "category"))]
    pub category: String,
    #[serde(rename(deserialize = "Client", serialize = "client"))]
    pub client: String,
}

/// Row of a `SUBSCRIPTION_OFFER_CODE_REDEMPTION`/`SUMMARY` report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionsOffersRedemptionReport {
    #[serde(rename(deserialize = "Date", serialize = "date"))]
    pub date: ReportDate,
    #[serde(rename(deserialize = "App Name", serialize = "app_name"))]
    pub app_name: String,
    #[serde(rename(deserialize = "App Apple ID", serialize = "app_apple_id"))]
    pub app_apple_id: ReportInteger,
    #[serde(rename(deserialize = "Subscription Name", serialize = "subscription_name"))]
    pub subscription_name: String,
    #[serde(rename(deserialize = "Subscription Apple ID", serialize = "subscription_apple_id"))]
    pub subscription_apple_id: ReportInteger,
    #[serde(rename(deserialize = "Offer Reference Name", serialize = "offer_reference_name"))]
    pub offer_reference_name: String,
    #[serde(rename(deserialize = "Offer Code", serialize = "offer_code"))]
    pub offer_code: String,
    #[serde(rename(deserialize = "Territory", serialize = "territory"))]
    pub territory: String,
    #[serde(rename(deserialize = "Redemptions", serialize = "redemptions"))]
    pub redemptions: ReportInteger,
}
