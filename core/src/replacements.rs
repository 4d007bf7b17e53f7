/// Fixed literal replacement table: quoted Dart string literals mapped to
/// `l10n` accessor expressions. Patterns are exact substrings, never
/// regexes, so a pattern can only match what the source file spells out
/// verbatim (including the surrounding quotes).
///
/// Order is preserved from the original fix list. No replacement text
/// reproduces any pattern, so a second application is a no-op.
pub static REPLACEMENTS: &[(&str, &str)] = &[
    // Common words
    ("'Cancel'", "l10n.cancel"),
    ("'Save'", "l10n.save"),
    ("'Done'", "l10n.done"),
    ("'Submit'", "l10n.submit"),
    ("'Yes'", "l10n.yes"),
    ("'No'", "l10n.no"),
    ("'Edit'", "l10n.edit"),
    ("'Delete'", "l10n.delete"),
    // Navigation
    ("'Dashboard'", "l10n.dashboard"),
    ("'Orders'", "l10n.orders"),
    ("'My Orders'", "l10n.myOrders"),
    ("'Invoices'", "l10n.invoices"),
    ("'Reviews'", "l10n.reviews"),
    ("'My Reviews'", "l10n.myReviews"),
    ("'Profile'", "l10n.profile"),
    ("'Cart'", "l10n.cart"),
    ("'Services'", "l10n.services"),
    ("'Home'", "l10n.home"),
    // Dashboard
    ("'Our Services'", "l10n.ourServices"),
    ("'View all services'", "l10n.viewAllServices"),
    ("'Active'", "l10n.active"),
    ("'Previous'", "l10n.previous"),
    ("'No Active Orders'", "l10n.noActiveOrders"),
    ("'Book your first service today!'", "l10n.bookYourFirstServiceToday"),
    ("'No Previous Orders'", "l10n.noPreviousOrders"),
    (
        "'Your completed orders will appear here'",
        "l10n.yourCompletedOrdersWillAppearHere",
    ),
    ("'Book Now'", "l10n.bookNow"),
    ("'Track Order'", "l10n.trackOrder"),
    ("'View Technician Details'", "l10n.viewTechnicianDetails"),
    // Notifications
    ("'Enable Notifications'", "l10n.enableNotifications"),
    (
        "'Get real-time updates about your bookings, technician assignments, and service completion.'",
        "l10n.getRealTimeUpdatesAboutYourBookings",
    ),
    ("'Not Now'", "l10n.notNow"),
    ("'Allow'", "l10n.allow"),
    (
        "'Notifications enabled successfully!'",
        "l10n.notificationsEnabledSuccessfully",
    ),
    ("'Notifications'", "l10n.notifications"),
    ("'No Notifications'", "l10n.noNotifications"),
    (r"'You\'re all caught up!'", "l10n.youreAllCaughtUp"),
    ("'Mark all read'", "l10n.markAllRead"),
    ("'Clear All Notifications'", "l10n.clearAllNotifications"),
    ("'Notification deleted'", "l10n.notificationDeleted"),
    ("'Undo'", "l10n.undo"),
    // Invoices
    ("'No Invoices Yet'", "l10n.noInvoicesYet"),
    (
        "'Complete a service to generate invoices'",
        "l10n.completeServiceToGenerateInvoices",
    ),
    ("'Invoice #'", "l10n.invoiceNumber"),
    ("'PAID'", "l10n.paid"),
    ("'Download / Share Invoice'", "l10n.downloadShareInvoice"),
    // Reviews
    ("'To Review'", "l10n.toReview"),
    ("'No Services to Review'", "l10n.noServicesToReview"),
    (
        "'Complete services to leave reviews'",
        "l10n.completeServicesToLeaveReviews",
    ),
    ("'Completed on'", "l10n.completedOn"),
    ("'Write a Review'", "l10n.writeAReview"),
    ("'No Reviews Yet'", "l10n.noReviewsYet"),
    ("'Your reviews will appear here'", "l10n.yourReviewsWillAppearHere"),
    ("'Rate Your Experience'", "l10n.rateYourExperience"),
    ("'Tap to rate'", "l10n.tapToRate"),
    ("'Excellent!'", "l10n.excellent"),
    ("'Very Good!'", "l10n.veryGood"),
    ("'Good'", "l10n.good"),
    ("'Fair'", "l10n.fair"),
    ("'Poor'", "l10n.poor"),
    ("'Share your experience (optional)...'", "l10n.shareYourExperience"),
    ("'Thank you for your review!'", "l10n.thankYouForYourReview"),
    // Profile and settings
    ("'Edit Profile'", "l10n.editProfile"),
    ("'Settings'", "l10n.settings"),
    (
        "'Manage notification preferences'",
        "l10n.manageNotificationPreferences",
    ),
    ("'Saved Addresses'", "l10n.savedAddresses"),
    ("'Payment Methods'", "l10n.paymentMethods"),
    ("'Manage payment options'", "l10n.managePaymentOptions"),
    ("'Help & Support'", "l10n.helpAndSupport"),
    ("'Get help and contact us'", "l10n.getHelpAndContactUs"),
    ("'About'", "l10n.about"),
    ("'App version and information'", "l10n.appVersionAndInformation"),
    ("'Logout'", "l10n.logout"),
    ("'Are you sure you want to logout?'", "l10n.areYouSureYouWantToLogout"),
    ("'Full Name'", "l10n.fullName"),
    ("'Email Address'", "l10n.emailAddress"),
    ("'Phone Number'", "l10n.phoneNumber"),
    ("'Address'", "l10n.address"),
    ("'Save Changes'", "l10n.saveChanges"),
    ("'Profile updated successfully!'", "l10n.profileUpdatedSuccessfully"),
    // Cart
    ("'Your cart is empty'", "l10n.yourCartIsEmpty"),
    ("'Add some services to get started'", "l10n.addSomeServicesToGetStarted"),
    ("'Clear All'", "l10n.clearAll"),
    (
        "'Are you sure you want to remove all items?'",
        "l10n.areYouSureYouWantToRemoveAllItems",
    ),
    ("'Clear'", "l10n.clear"),
    ("'Total'", "l10n.total"),
    ("'Proceed to Checkout'", "l10n.proceedToCheckout"),
    // Services
    ("'Search services...'", "l10n.searchServices"),
    ("'No services found'", "l10n.noServicesFound"),
    ("'Try adjusting your search terms'", "l10n.tryAdjustingYourSearchTerms"),
    ("'Add to Cart'", "l10n.addToCart"),
    ("'View Cart'", "l10n.viewCart"),
    ("'Service Detail'", "l10n.serviceDetail"),
    (r"'What\'s Included'", "l10n.whatsIncluded"),
    ("'Not Included'", "l10n.notIncluded"),
    // Orders
    ("'Order Details'", "l10n.orderDetails"),
    ("'Order #'", "l10n.orderNumber"),
    ("'Services List'", "l10n.servicesList"),
    ("'Booking Date'", "l10n.bookingDate"),
    ("'Service Time'", "l10n.serviceTime"),
    ("'Order Status'", "l10n.orderStatus"),
    ("'Pending'", "l10n.pending"),
    ("'Confirmed'", "l10n.confirmed"),
    ("'In Progress'", "l10n.inProgress"),
    ("'Completed'", "l10n.completed"),
    ("'Cancelled'", "l10n.cancelled"),
    ("'Technician'", "l10n.technician"),
    ("'Orders Done'", "l10n.ordersDone"),
    ("'Experience'", "l10n.experience"),
    ("'View Profile'", "l10n.viewProfile"),
    ("'Chat'", "l10n.chat"),
    ("'Cancel Booking'", "l10n.cancelBooking"),
    // Chat
    ("'Type a message...'", "l10n.typeAMessage"),
    ("'No messages yet'", "l10n.noMessagesYet"),
    ("'Just now'", "l10n.justNow"),
    ("'Calling technician...'", "l10n.callingTechnician"),
    // Addresses
    ("'Home Address'", "l10n.homeAddress"),
    ("'Editing'", "l10n.editing"),
    ("'Enter your address'", "l10n.enterYourAddress"),
    ("'Address updated successfully!'", "l10n.addressUpdatedSuccessfully"),
    ("'Add New Address'", "l10n.addNewAddress"),
    // Vendor profile
    ("'Vendor Profile'", "l10n.vendorProfile"),
    ("'Order Done'", "l10n.orderDone"),
    ("'Time Period'", "l10n.timePeriod"),
    ("'Profile Verified'", "l10n.profileVerified"),
    ("'Police Verified'", "l10n.policeVerified"),
    ("'Services Provide'", "l10n.servicesProvide"),
    // Form validation
    ("'Please enter your name'", "l10n.pleaseEnterYourName"),
    ("'Please enter your email'", "l10n.pleaseEnterYourEmail"),
    ("'Please enter a valid email'", "l10n.pleaseEnterValidEmail"),
    ("'Please enter your phone number'", "l10n.pleaseEnterYourPhoneNumber"),
    (
        "'Phone number must contain only digits'",
        "l10n.phoneNumberMustContainOnlyDigits",
    ),
];

/// Apply every table entry in order, each on the cumulative result of
/// the previous ones.
pub fn apply_replacements(content: &str) -> String {
    let mut current = content.to_string();
    for (pattern, replacement) in REPLACEMENTS {
        if current.contains(pattern) {
            current = current.replace(pattern, replacement);
        }
    }
    current
}
