//! The six bronze → silver entity pairs

use std::fmt;

/// A bronze/silver table pair handled by one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    CustomerInfo,
    ProductInfo,
    SalesDetail,
    ErpCustomer,
    ErpLocation,
    ErpCategory,
}

impl Entity {
    /// Fixed execution order
    pub const ALL: [Entity; 6] = [
        Entity::CustomerInfo,
        Entity::ProductInfo,
        Entity::SalesDetail,
        Entity::ErpCustomer,
        Entity::ErpLocation,
        Entity::ErpCategory,
    ];

    /// Table name, identical in the bronze and silver schemas
    pub fn table(self) -> &'static str {
        match self {
            Entity::CustomerInfo => "crm_cust_info",
            Entity::ProductInfo => "crm_prd_info",
            Entity::SalesDetail => "crm_sales_details",
            Entity::ErpCustomer => "erp_cust_az12",
            Entity::ErpLocation => "erp_loc_a101",
            Entity::ErpCategory => "erp_px_cat_g1v2",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::CustomerInfo => "CustomerInfo",
            Entity::ProductInfo => "ProductInfo",
            Entity::SalesDetail => "SalesDetail",
            Entity::ErpCustomer => "ErpCustomer",
            Entity::ErpLocation => "ErpLocation",
            Entity::ErpCategory => "ErpCategory",
        };
        f.write_str(name)
    }
}
