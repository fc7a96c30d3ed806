mod book_list;
