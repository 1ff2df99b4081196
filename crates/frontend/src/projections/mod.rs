pub mod p900_sales_reporting;
