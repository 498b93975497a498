use serde::{Deserialize, Serialize};

use crate::scalar::{ReportDate, ReportFloat, ReportInteger};

/// Row of a `FINANCIAL` report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialReport {
    #[serde(rename(deserialize = "Start Date", serialize = "start_date"))]
    pub start_date: ReportDate,
    #[serde(rename(deserialize = "End Date", serialize = "end_date"))]
    pub end_date: ReportDate,
    #[serde(rename(deserialize = "UPC", serialize = "upc"))]
    pub upc: String,
    #[serde(rename(deserialize = "ISRC / ISBN", serialize = "isrc_isbn"))]
    pub isrc_isbn: String,
    #[serde(rename(deserialize = "Vendor Identifier", serialize = "vendor_identifier"))]
    pub vendor_identifier: String,
    #[serde(rename(deserialize = "Quantity", serialize = "quantity"))]
    pub quantity: ReportInteger,
    /// Proceeds per unit in the partner share currency.
    #[serde(rename(deserialize = "Partner Share", serialize = "partner_share"))]
    pub partner_share: ReportFloat,
    /// Quantity multiplied by partner share.
    #[serde(rename(deserialize = "Extended Partner Share", serialize = "extended_partner_share"))]
    pub extended_partner_share: ReportFloat,
    #[serde(rename(deserialize = "Partner Share Currency", serialize = "partner_share_currency"))]
    pub partner_share_currency: String,
    #[serde(rename(deserialize = "Sales or Return", serialize = "sales_or_return"))]
    pub sales_or_return: String,
    #[serde(rename(deserialize = "Apple Identifier", serialize = "apple_identifier"))]
    pub apple_identifier: ReportInteger,
    #[serde(rename(deserialize = "Artist / Show / Developer / Author", serialize = "artist_show_developer_author"))]
    pub artist_show_developer_author: String,
    #[serde(rename(deserialize = "Title", serialize = "title"))]
    pub title: String,
    #[serde(rename(deserialize = "Label / Studio / Network / Developer / Publisher", serialize = "label_studio_network_developer_publisher"))]
    pub label_studio_network_developer_publisher: String,
    #[serde(rename(deserialize = "Grid", serialize = "grid"))]
    pub grid: String,
    #[serde(rename(deserialize = "Product Type Identifier", serialize = "product_type_identifier"))]
    pub product_type_identifier: String,
    #[serde(rename(deserialize = "ISAN / Other Identifier", serialize = "isan_other_identifier"))]
    pub isan_other_identifier: String,
    #[serde(rename(deserialize = "Country Of Sale", serialize = "country_of_sale"))]
    pub country_of_sale: String,
    #[serde(rename(deserialize = "Pre-order Flag", serialize = "preorder_flag"))]
    pub preorder_flag: String,
    #[serde(rename(deserialize = "Promo Code", serialize = "promo_code"))]
    pub promo_code: String,
    #[serde(rename(deserialize = "Customer Price", serialize = "customer_price"))]
    pub customer_price: ReportFloat,
    #[serde(rename(deserialize = "Customer Currency", serialize = "customer_currency"))]
    pub customer_currency: String,
}

/// Row of a `FINANCE_DETAIL` report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceDetailReport {
    #[serde(rename(deserialize = "Transaction Date", serialize = "transaction_date"))]
    pub transaction_date: ReportDate,
    #[serde(rename(deserialize = "Settlement Date", serialize = "settlement_date"))]
    pub settlement_date: ReportDate,
    #[serde(rename(deserialize = "Apple Identifier", serialize = "apple_identifier"))]
    pub apple_identifier: ReportInteger,
    #[serde(rename(deserialize = "SKU", serialize = "sku"))]
    pub sku: String,
    #[serde(rename(deserialize = "Title", serialize = "title"))]
    pub title: String,
    #[serde(rename(deserialize = "Developer Name", serialize = "developer_name"))]
    pub developer_name: String,
    #[serde(rename(deserialize = "Product Type Identifier", serialize = "product_type_identifier"))]
    pub product_type_identifier: String,
    #[serde(rename(deserialize = "Country of Sale", serialize = "country_of_sale"))]
    pub country_of_sale: String,
    #[serde(rename(deserialize = "Quantity", serialize = "quantity"))]
    pub quantity: ReportInteger,
    #[serde(rename(deserialize = "Partner Share", serialize = "partner_share"))]
    pub partner_share: ReportFloat,
    #[serde(rename(deserialize = "Extended Partner Share", serialize = "extended_partner_share"))]
    pub extended_partner_share: ReportFloat,
    #[serde(rename(deserialize = "Partner Share Currency", serialize = "partner_share_currency"))]
    pub partner_share_currency: String,
    #[serde(rename(deserialize = "Customer Price", serialize = "customer_price"))]
    pub customer_price: ReportFloat,
    #[serde(rename(deserialize = "Customer Currency", serialize = "customer_currency"))]
    pub customer_currency: String,
    #[serde(rename(deserialize = "Sale or Return", serialize = "sale_or_return"))]
    pub sale_or_return: String,
    #[serde(rename(deserialize = "Promo Code", serialize = "promo_code"))]
    pub promo_code: String,
    #[serde(rename(deserialize = "Order Type", serialize = "order_type"))]
    pub order_type: String,
    #[serde(rename(deserialize = "Region", serialize = "region"))]
    pub region: String,
}
