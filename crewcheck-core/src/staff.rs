//! Staff grouping for card detail views.

use crate::event::Staff;

/// Names sharing a position, in the order they appear on the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionGroup {
    pub position: String,
    pub names: Vec<String>,
}

/// Group staff by position, keeping first-seen order of positions and of
/// names within each position.
pub fn group_by_position(staff: &[Staff]) -> Vec<PositionGroup> {
    let mut groups: Vec<PositionGroup> = Vec::new();

    for member in staff {
        match groups.iter_mut().find(|g| g.position == member.position) {
            Some(group) => group.names.push(member.name.clone()),
            None => groups.push(PositionGroup {
                position: member.position.clone(),
                names: vec![member.name.clone()],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_position_keeps_order() {
        let staff = vec![
            Staff::new("Sam", "Host"),
            Staff::new("Lee", "Designer"),
            Staff::new("Kim", "Host"),
            Staff::new("Ana", "Technician"),
            Staff::new("Bo", "Designer"),
        ];

        let groups = group_by_position(&staff);
        let positions: Vec<&str> = groups.iter().map(|g| g.position.as_str()).collect();

        assert_eq!(positions, vec!["Host", "Designer", "Technician"]);
        assert_eq!(groups[0].names, vec!["Sam", "Kim"]);
        assert_eq!(groups[1].names, vec!["Lee", "Bo"]);
        assert_eq!(groups[2].names, vec!["Ana"]);
    }

    #[test]
    fn test_group_by_position_empty() {
        assert!(group_by_position(&[]).is_empty());
    }
}
