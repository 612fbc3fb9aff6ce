
mod test_access;
mod test_properties;
