use leptos::prelude::*;

use crate::errors::AppError;

/// Applies the result of a list load to the given signals. On success the
/// previous list is replaced; on failure it is left untouched and only the
/// error signal is set.
pub fn handle_initial_load<T: Clone + Send + Sync + 'static>(
    load_result: Result<Vec<T>, AppError>,
    loaded_vec: RwSignal<Vec<T>>,
    load_error: RwSignal<Option<AppError>>,
) {
    match load_result {
        Ok(init_vec) => {
            loaded_vec.set(init_vec);
            load_error.set(None);
        },
        Err(e) => load_error.set(Some(e)),
    };
}

#[cfg(test)]
mod tests {
    use leptos::prelude::*;
    use crate::errors::AppError;
    use crate::unpack::handle_initial_load;

    #[test]
    fn test_handle_initial_load() {
        let owner = Owner::new();
        owner.set();
        let loaded_vec = RwSignal::new(Vec::new());
        let load_error = RwSignal::new(None);

        handle_initial_load(Ok(vec![1, 2, 3]), loaded_vec, load_error);
        assert_eq!(loaded_vec.read().as_slice(), &[1, 2, 3]);
        assert_eq!(*load_error.read(), None);

        handle_initial_load(Ok(vec![4, 5, 6]), loaded_vec, load_error);
        assert_eq!(loaded_vec.read().as_slice(), &[4, 5, 6]);
        assert_eq!(*load_error.read(), None);

        // a failed reload must not wipe what is already displayed
        let error = AppError::CommunicationError(ServerFnErrorErr::Request(String::from("test")));
        handle_initial_load(Err(error.clone()), loaded_vec, load_error);
        assert_eq!(loaded_vec.read().as_slice(), &[4, 5, 6]);
        assert_eq!(*load_error.read(), Some(error));

        // a successful reload clears the previous error
        handle_initial_load(Ok(vec![7]), loaded_vec, load_error);
        assert_eq!(loaded_vec.read().as_slice(), &[7]);
        assert_eq!(*load_error.read(), None);
    }

    #[test]
    fn test_handle_initial_load_error_on_first_load() {
        let owner = Owner::new();
        owner.set();
        let loaded_vec = RwSignal::new(Vec::<i32>::new());
        let load_error = RwSignal::new(None);

        let error = AppError::UpstreamStatus(500);
        handle_initial_load(Err(error.clone()), loaded_vec, load_error);
        assert!(loaded_vec.read().is_empty());
        assert_eq!(*load_error.read(), Some(error));
    }
}
