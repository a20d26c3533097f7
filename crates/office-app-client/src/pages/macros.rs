/// Implements the parts of [`DisplayablePage`](super::DisplayablePage) that
/// are the same for every page
///
/// Pass `reset_all` when nothing on the page should survive leaving it
#[macro_export]
macro_rules! displayable_page_common {
    ($route: expr) => {
        fn route() -> officehub_client_core::Route {
            $route
        }
    };
    ($route: expr, reset_all) => {
        $crate::displayable_page_common!($route);

        fn reset_to_default(&mut self, _: super::private::Token) {
            *self = Default::default();
        }
    };
}
