use std::rc::Rc;

use yewdux::store::Reducer;

use super::AppState;
use crate::actions::Action;

impl Reducer<AppState> for Action {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        let next = Rc::make_mut(&mut state);

        match self {
            Action::SetRegions { regions } => next.regions = regions,
            Action::SetCategories { categories } => next.categories = categories,
            Action::SetRestaurants { restaurants } => next.restaurants = restaurants,
            Action::SetRestaurant { restaurant } => next.restaurant = restaurant,
            Action::SelectRegion { region_id } => {
                next.selected_region = next
                    .regions
                    .iter()
                    .find(|region| region.id == region_id)
                    .cloned();
            }
            Action::SelectCategory { category_id } => {
                next.selected_category = next
                    .categories
                    .iter()
                    .find(|category| category.id == category_id)
                    .cloned();
            }
            Action::ChangeLoginField { name, value } => next.login_fields.set(name, value),
            Action::SetAccessToken { access_token } => next.access_token = Some(access_token),
            Action::ResetAccessToken => next.access_token = None,
            Action::ChangeReviewField { name, value } => next.review_fields.set(name, value),
            Action::ResetReviewInput => next.review_fields = Default::default(),
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        change_login_field, change_review_field, reset_access_token, reset_review_input,
        select_category, select_region, set_access_token, set_categories, set_regions,
        set_restaurant,
    };
    use crate::store::StoreHandle;
    use shared::models::{Category, LoginField, Region, Restaurant, ReviewField};
    use yewdux::{Context, Dispatch};

    fn reduce(state: AppState, action: Action) -> AppState {
        (*action.apply(Rc::new(state))).clone()
    }

    fn catalog_state() -> AppState {
        AppState {
            regions: vec![Region::new(1, "서울"), Region::new(2, "부산")],
            categories: vec![Category::new(1, "한식"), Category::new(2, "중식")],
            ..AppState::default()
        }
    }

    #[test]
    fn test_set_regions_and_categories() {
        let state = reduce(AppState::default(), set_regions(vec![Region::new(1, "서울")]));
        let state = reduce(state, set_categories(vec![Category::new(1, "한식")]));

        assert_eq!(state.regions, vec![Region::new(1, "서울")]);
        assert_eq!(state.categories, vec![Category::new(1, "한식")]);
    }

    #[test]
    fn test_select_region_picks_matching_region() {
        let state = reduce(catalog_state(), select_region(2));
        assert_eq!(state.selected_region, Some(Region::new(2, "부산")));

        let state = reduce(state, select_region(99));
        assert_eq!(state.selected_region, None);
    }

    #[test]
    fn test_select_category_picks_matching_category() {
        let state = reduce(catalog_state(), select_category(1));
        assert_eq!(state.selected_category, Some(Category::new(1, "한식")));
    }

    #[test]
    fn test_set_restaurant_can_clear_detail() {
        let restaurant = Restaurant {
            id: 1,
            name: "마녀주방".to_string(),
            ..Restaurant::default()
        };
        let state = reduce(AppState::default(), set_restaurant(Some(restaurant.clone())));
        assert_eq!(state.restaurant, Some(restaurant));

        let state = reduce(state, set_restaurant(None));
        assert_eq!(state.restaurant, None);
    }

    #[test]
    fn test_login_field_changes_only_touch_named_field() {
        let state = reduce(
            AppState::default(),
            change_login_field(LoginField::Email, "tester@example.com"),
        );
        let state = reduce(state, change_login_field(LoginField::Password, "test"));

        assert_eq!(state.login_fields.email, "tester@example.com");
        assert_eq!(state.login_fields.password, "test");
    }

    #[test]
    fn test_access_token_set_and_reset() {
        let state = reduce(AppState::default(), set_access_token("ACCESS_TOKEN"));
        assert_eq!(state.access_token.as_deref(), Some("ACCESS_TOKEN"));
        assert!(state.is_logged_in());

        let state = reduce(state, reset_access_token());
        assert_eq!(state.access_token, None);
        assert!(!state.is_logged_in());
    }

    #[test]
    fn test_review_input_change_and_reset() {
        let state = reduce(AppState::default(), change_review_field(ReviewField::Score, "5"));
        let state = reduce(
            state,
            change_review_field(ReviewField::Description, "정말 최고"),
        );
        assert_eq!(state.review_fields.score, "5");
        assert_eq!(state.review_fields.description, "정말 최고");

        let state = reduce(state, reset_review_input());
        assert!(state.review_fields.score.is_empty());
        assert!(state.review_fields.description.is_empty());
    }

    #[test]
    fn test_dispatch_handle_applies_actions() {
        let cx = Context::new();
        let dispatch = Dispatch::<AppState>::new(&cx);

        dispatch.dispatch(set_access_token("ACCESS_TOKEN"));

        assert_eq!(dispatch.state().access_token.as_deref(), Some("ACCESS_TOKEN"));
    }
}
