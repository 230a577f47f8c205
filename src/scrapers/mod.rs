pub mod sgc;
pub mod tep_detail;
pub mod tep_list;
