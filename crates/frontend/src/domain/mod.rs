pub mod a001_brand;
pub mod a002_category;
pub mod a003_supplier;
pub mod a004_discount;
pub mod a005_alarm;
