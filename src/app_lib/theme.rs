//! Shared Tailwind class constants so the form controls stay visually
//! consistent across routes.

pub struct Theme;

impl Theme {
    /// Field label above each input.
    pub const LABEL: &'static str =
        "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Standard text input style for the login form.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

    /// Inline error annotation rendered under an invalid field.
    pub const FIELD_ERROR: &'static str = "mt-1 text-sm text-red-600 dark:text-red-400";

    /// Checkbox for the "remember me" toggle.
    pub const CHECKBOX: &'static str = "w-4 h-4 border border-gray-300 rounded bg-gray-50 focus:ring-2 focus:ring-blue-300 dark:bg-gray-700 dark:border-gray-600 dark:focus:ring-blue-600";

    /// Label next to the "remember me" checkbox.
    pub const CHECKBOX_LABEL: &'static str =
        "ms-2 text-sm font-medium text-gray-900 dark:text-gray-300";
}
