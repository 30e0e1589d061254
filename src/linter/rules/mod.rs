pub mod privsec_section;
